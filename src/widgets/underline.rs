/// Color of the highlighter bar drawn behind underlined text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UnderlineColor {
    #[default]
    Primary,
    Secondary,
    Accent,
    /// A `#rrggbb` style literal.
    Hex(String),
    /// A tailwind palette name such as `green`.
    Named(String),
}

impl From<&str> for UnderlineColor {
    fn from(value: &str) -> Self {
        match value {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "accent" => Self::Accent,
            x if x.starts_with('#') => Self::Hex(x.to_string()),
            x => Self::Named(x.to_string()),
        }
    }
}

impl UnderlineColor {
    pub fn bg_class(&self) -> String {
        match self {
            Self::Primary => "bg-blue-500".to_string(),
            Self::Secondary => "bg-purple-500".to_string(),
            Self::Accent => "bg-pink-500".to_string(),
            Self::Hex(hex) => format!("bg-[{hex}]"),
            Self::Named(name) => format!("bg-{name}-500"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_theme_colors() {
        assert_eq!(UnderlineColor::from("primary").bg_class(), "bg-blue-500");
        assert_eq!(UnderlineColor::from("secondary").bg_class(), "bg-purple-500");
        assert_eq!(UnderlineColor::from("accent").bg_class(), "bg-pink-500");
        assert_eq!(UnderlineColor::default(), UnderlineColor::Primary);
    }

    #[test]
    fn test_custom_colors() {
        assert_eq!(UnderlineColor::from("#ffcc00").bg_class(), "bg-[#ffcc00]");
        assert_eq!(UnderlineColor::from("green").bg_class(), "bg-green-500");
    }
}
