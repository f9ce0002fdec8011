use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The color category of a species, as displayed on the Dex page.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Color {
    #[string = "Black"]
    Black,
    #[string = "Blue"]
    Blue,
    #[string = "Brown"]
    Brown,
    #[string = "Gray"]
    #[alias = "Grey"]
    #[default]
    Gray,
    #[string = "Green"]
    Green,
    #[string = "Pink"]
    Pink,
    #[string = "Purple"]
    Purple,
    #[string = "Red"]
    Red,
    #[string = "White"]
    White,
    #[string = "Yellow"]
    Yellow,
}

#[cfg(test)]
mod color_test {
    use crate::{
        Color,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(Color::Green, "Green");
        test_string_serialization(Color::Purple, "Purple");
    }

    #[test]
    fn deserializes_alternate_spelling() {
        test_string_deserialization("grey", Color::Gray);
        test_string_deserialization("Gray", Color::Gray);
    }
}
