//! Learner-facing message catalog.
//!
//! The wording here is part of the product: it is what learners read when a
//! check fails, so changes are breaking. Messages specific to a single
//! exercise live next to that exercise's rules; everything reused across
//! exercises is collected here.

pub const INVALID_CODE: &str = "Invalid code";
pub const INCOMPLETE_CODE: &str = "Incomplete code";
pub const ONLY_ONE_STATEMENT: &str =
    "There should only be one statement in your code. Do you have an extra semi-colon?";
pub const STRING_INSIDE_SQUARE_BRACKETS: &str =
    "The value inside the square brackets should be a string";
pub const USE_NULLISH_COALESCING_OPERATOR: &str =
    "Please use the nullish coalescing operator: ??";
pub const USE_OBJECT_DESTRUCTURING: &str = "Please use object destructuring";
pub const NO_PROPERTIES_DESTRUCTURED: &str = "You are not destructuring any properties";

pub fn object_name(name: &str) -> String {
    format!("The object's name must be: {name}")
}

pub fn first_object_name(name: &str) -> String {
    format!("The first object's name must be: {name}")
}

pub fn property_name(name: &str) -> String {
    format!("The property's name must be: {name}")
}

pub fn property_on_object_must_be(object_name: &str, property_name: &str) -> String {
    format!("The property on the {object_name} object must be: {property_name}")
}

pub fn property_count(expected: usize, actual: usize) -> String {
    format!(
        "The object should have {expected} properties, your object has {actual} propert{}",
        if actual == 1 { "y" } else { "ies" }
    )
}

pub fn missing_properties(required: &[&str]) -> String {
    format!(
        "The object is missing the following properties: {}",
        required.join(",")
    )
}

pub fn incorrect_value(property: &str, value_type: &str) -> String {
    format!("{property} should have a {value_type} value")
}

pub fn must_be_a_nested_property(shape: &str) -> String {
    format!("The variable's value must be a property on a nested object: {shape}")
}

pub fn use_dot_notation(plural: bool) -> String {
    format!(
        "Please use dot notation to access the propert{}",
        if plural { "ies" } else { "y" }
    )
}

pub fn use_bracket_notation(plural: bool) -> String {
    format!(
        "Please use bracket notation to access the propert{}",
        if plural { "ies" } else { "y" }
    )
}

pub fn object_should_not_be_optional(object_name: &str) -> String {
    format!("The {object_name} object should not be optional")
}

pub fn right_side_value_must_be(value_type: &str, value_name: &str) -> String {
    format!("The value on the right side of the = must be {value_type}: {value_name}")
}

pub fn destructure_only_this_property(property: &str) -> String {
    format!("Destructure only the {property} property")
}

pub fn the_property_to_retrieve_is_called(property: &str) -> String {
    format!("The property to retrieve is called:  {property}")
}

pub fn property_shorthand_warning(property: &str) -> String {
    format!(
        "To destructure a property without renaming it you don't need the value, only the key, i.e {{ {property} }}"
    )
}

pub fn unrequired_alias(property: &str, alias: &str) -> String {
    format!("You are aliasing the {property} property as: {alias}")
}

pub fn use_aliasing(property: &str, alias: &str) -> String {
    format!("Use aliasing to rename the {property} property to {alias}, i.e. {{ {property}:  {alias} }}")
}

pub fn incorrect_alias(property: &str, alias: &str) -> String {
    format!("The  {property} property should be aliased as {alias}, i.e. {{ {property}:  {alias} }}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn property_count_pluralizes_the_actual_count() {
        assert_eq!(
            property_count(2, 1),
            "The object should have 2 properties, your object has 1 property"
        );
        assert_eq!(
            property_count(3, 5),
            "The object should have 3 properties, your object has 5 properties"
        );
    }

    #[test]
    fn missing_properties_joins_without_spaces() {
        assert_eq!(
            missing_properties(&["title", "description"]),
            "The object is missing the following properties: title,description"
        );
    }

    #[test]
    fn notation_messages_pluralize() {
        assert_eq!(
            use_dot_notation(false),
            "Please use dot notation to access the property"
        );
        assert_eq!(
            use_dot_notation(true),
            "Please use dot notation to access the properties"
        );
    }
}
