//! Cross-check of wheel references in a finished `description.xml`.
//!
//! Consoles drop channels whose `Wheel` names no wheel of the fixture type
//! without further notice on import, so problems are reported as warnings
//! instead of errors.

use std::{collections::BTreeSet, fmt};

use log::warn;
use roxmltree::{Document, Node, TextPos};

/// A wheel reference problem in a fixture description.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WheelProblem {
    #[error("Validation parse error: {0}")]
    InvalidXml(String),
    #[error("Could not find FixtureType element")]
    NoFixtureType,
    #[error("Channel '{channel}': references Wheel '{wheel}' which is not defined. Defined: {defined} (line {at})")]
    UndefinedWheel {
        /// `OriginalAttribute` of the offending channel function
        channel: String,
        wheel: String,
        defined: DefinedWheels,
        at: TextPos,
    },
}

/// Sorted names of the wheels of a fixture type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DefinedWheels(pub BTreeSet<String>);

impl fmt::Display for DefinedWheels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.0.iter().map(String::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}

trait GetXmlNode<'a, 'input> {
    fn find_child(&self, tag: &str) -> Option<Node<'a, 'input>>;
}

impl<'a, 'input> GetXmlNode<'a, 'input> for Node<'a, 'input> {
    /// Find the first child node with the given tag name.
    fn find_child(&self, tag: &str) -> Option<Node<'a, 'input>> {
        self.children().find(|n| n.has_tag_name(tag))
    }
}

/// Check that every `Wheel` attribute on a `ChannelFunction` names a `Wheel`
/// defined in the `Wheels` of the fixture type.
///
/// Returns no problems exactly when all references resolve. Text that is not
/// XML yields a single [`WheelProblem::InvalidXml`].
pub fn validate_wheel_references(description: &str) -> Vec<WheelProblem> {
    let problems = match check(description) {
        Ok(problems) => problems,
        Err(problem) => vec![problem],
    };
    for problem in &problems {
        warn!("{problem}");
    }
    problems
}

fn check(description: &str) -> Result<Vec<WheelProblem>, WheelProblem> {
    let doc = Document::parse(description).map_err(|e| WheelProblem::InvalidXml(e.to_string()))?;
    let fixture_type = doc
        .root_element()
        .find_child("FixtureType")
        .ok_or(WheelProblem::NoFixtureType)?;

    let defined = DefinedWheels(
        fixture_type
            .descendants()
            .filter(|n| n.has_tag_name("Wheel"))
            .filter(|n| n.parent().is_some_and(|p| p.has_tag_name("Wheels")))
            .filter_map(|n| n.attribute("Name"))
            .map(String::from)
            .collect(),
    );

    Ok(fixture_type
        .descendants()
        .filter(|n| n.has_tag_name("ChannelFunction"))
        .filter_map(|function| {
            let wheel = function.attribute("Wheel").filter(|w| !w.is_empty())?;
            if defined.0.contains(wheel) {
                return None;
            }
            Some(WheelProblem::UndefinedWheel {
                channel: function
                    .attribute("OriginalAttribute")
                    .unwrap_or("?")
                    .to_owned(),
                wheel: wheel.to_owned(),
                defined: defined.clone(),
                at: doc.text_pos_at(function.range().start),
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const BROKEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GDTF DataVersion="1.1">
  <FixtureType Name="Test">
    <Wheels>
      <Wheel Name="Gobo_Wheel"/>
      <Wheel Name="Color_Wheel"/>
    </Wheels>
    <DMXModes>
      <DMXMode Name="Standard">
        <ChannelFunction Attribute="Gobo1" OriginalAttribute="Gobo_Wheel" Wheel="Gobo_Wheel"/>
        <ChannelFunction Attribute="Color1" OriginalAttribute="Colour" Wheel="Colour"/>
        <ChannelFunction Attribute="Prism1" Wheel="Prism"/>
        <ChannelFunction Attribute="Dimmer" OriginalAttribute="Dimmer" Wheel=""/>
      </DMXMode>
    </DMXModes>
  </FixtureType>
</GDTF>"#;

    #[test]
    fn undefined_wheels_are_reported() {
        let problems = validate_wheel_references(BROKEN);
        let messages: Vec<String> = problems.iter().map(|p| p.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Channel 'Colour': references Wheel 'Colour' which is not defined. \
                Defined: Color_Wheel, Gobo_Wheel (line 11:9)",
                "Channel '?': references Wheel 'Prism' which is not defined. \
                Defined: Color_Wheel, Gobo_Wheel (line 12:9)",
            ]
        );
    }

    #[test]
    fn no_wheels_defined() {
        let problems = validate_wheel_references(
            r#"<GDTF><FixtureType><ChannelFunction OriginalAttribute="Gobo" Wheel="Gobo"/></FixtureType></GDTF>"#,
        );
        assert!(matches!(
            problems.as_slice(),
            [WheelProblem::UndefinedWheel { defined, .. }] if defined.to_string() == "none"
        ));
    }

    #[test]
    fn resolved_references_are_fine() {
        let problems = validate_wheel_references(
            r#"<GDTF><FixtureType><Wheels><Wheel Name="Gobo"/></Wheels><ChannelFunction Wheel="Gobo"/></FixtureType></GDTF>"#,
        );
        assert!(problems.is_empty());
    }

    #[test]
    fn structural_problems() {
        assert_eq!(
            validate_wheel_references(r#"<GDTF><Wheels/></GDTF>"#),
            vec![WheelProblem::NoFixtureType]
        );
        let problems = validate_wheel_references("<GDTF><FixtureType></GDTF>");
        assert!(matches!(problems.as_slice(), [WheelProblem::InvalidXml(_)]));
        assert!(problems[0].to_string().starts_with("Validation parse error: "));
    }
}
