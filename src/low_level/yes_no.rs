use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(
    Debug,
    strum::Display,
    strum::EnumString,
    SerializeDisplay,
    DeserializeFromStr,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
)]
pub enum YesNoEnum {
    #[strum(to_string = "Yes")]
    Yes,
    #[strum(to_string = "No")]
    #[default] // generated fixture types never have children
    No,
}

impl From<YesNoEnum> for bool {
    fn from(value: YesNoEnum) -> Self {
        match value {
            YesNoEnum::Yes => true,
            YesNoEnum::No => false,
        }
    }
}

impl From<bool> for YesNoEnum {
    fn from(value: bool) -> Self {
        match value {
            true => YesNoEnum::Yes,
            false => YesNoEnum::No,
        }
    }
}
