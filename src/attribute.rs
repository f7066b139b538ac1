use crate::{
    dimension::{DimensionKind, DimensionLiteral},
    element::Attribute,
};

/// Rewrites an attribute value into a quoted value, replacing a dimension literal
/// with a dimension resource reference.
pub fn rewrite_value(name: &str, value: &str) -> String {
    match DimensionLiteral::find(value) {
        Some(literal) => format!(
            "\"{}\"",
            literal.encode(DimensionKind::from_attribute_name(name))
        ),
        None => format!("\"{value}\""),
    }
}

/// Rewrites an attribute into its `name="value"` form.
pub fn rewrite_attribute(attribute: &Attribute) -> String {
    format!(
        "{}={}",
        attribute.name(),
        rewrite_value(attribute.name(), attribute.value())
    )
}

/// Returns `true` if an attribute value is rewritten.
pub fn is_rewritten(attribute: &Attribute) -> bool {
    DimensionLiteral::find(attribute.value()).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pass_through_non_dimensions() {
        for value in ["", "px", "dp_20", "0dp", "wrap_content", "@dimen/dp_10"] {
            for name in ["layout_width", "android:textSize"] {
                assert_eq!(rewrite_value(name, value), format!("\"{value}\""));
            }
        }
    }

    #[test]
    fn rewrite_layout_dimensions() {
        assert_eq!(
            rewrite_value("layout_width", "-10.5px"),
            "\"@dimen/dp_m_10_5\""
        );
        assert_eq!(
            rewrite_value("layout_width", "100.5dp"),
            "\"@dimen/dp_100_5\""
        );
        assert_eq!(rewrite_value("layout_height", "10px"), "\"@dimen/dp_10\"");
        assert_eq!(
            rewrite_value("layout_height", "-100dp"),
            "\"@dimen/dp_m_100\""
        );
    }

    #[test]
    fn rewrite_text_dimensions() {
        assert_eq!(rewrite_value("textSize", "100sp"), "\"@dimen/sp_100\"");
        assert_eq!(rewrite_value("textSize", "+10px"), "\"@dimen/sp_10\"");
        assert_eq!(
            rewrite_value("android:textSize", "14sp"),
            "\"@dimen/sp_14\""
        );
    }

    #[test]
    fn prefix_by_attribute_name() {
        for value in ["1dp", "20px", "3.5sp", "-4dip"] {
            assert!(rewrite_value("textSize", value).starts_with("\"@dimen/sp_"));
            assert!(rewrite_value("layout_margin", value).starts_with("\"@dimen/dp_"));
            assert!(rewrite_value("layout_margin", value).ends_with('"'));
        }
    }

    #[test]
    fn rewrite_idempotently() {
        let value = rewrite_value("layout_width", "16dp");
        let value = value.trim_matches('"');

        assert_eq!(
            rewrite_value("layout_width", value),
            format!("\"{value}\"")
        );
    }

    #[test]
    fn rewrite_whole_attribute() {
        let attribute = Attribute::from(("android:layout_width", "16dp"));

        assert!(is_rewritten(&attribute));
        assert_eq!(
            rewrite_attribute(&attribute),
            "android:layout_width=\"@dimen/dp_16\""
        );
    }

    #[test]
    fn keep_non_dimension_attribute() {
        let attribute = Attribute::from(("android:orientation", "vertical"));

        assert!(!is_rewritten(&attribute));
        assert_eq!(
            rewrite_attribute(&attribute),
            "android:orientation=\"vertical\""
        );
    }
}
