//! Macro for implementing Display and FromStr for keyword enums
//!
//! Config fields and log kinds are addressed by fixed keywords (in the JSON
//! file, on the command line, in log headers). This macro maps each variant
//! to its keyword in both directions, parsing case-insensitively.
//!
//! # Example
//!
//! ```rust
//! use tokentray_domain::impl_keyword_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Channel {
//!     Stable,
//!     Beta,
//! }
//!
//! impl_keyword_conversions!(Channel {
//!     Stable => "stable",
//!     Beta => "beta",
//! });
//!
//! assert_eq!("BETA".parse::<Channel>().unwrap(), Channel::Beta);
//! ```

/// Implements Display and FromStr for enums addressed by keyword
///
/// Keywords must be written in lowercase; parsing lowercases its input
/// before matching.
#[macro_export]
macro_rules! impl_keyword_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestKeyword {
        Alpha,
        BetaGamma,
    }

    impl_keyword_conversions!(TestKeyword {
        Alpha => "alpha",
        BetaGamma => "beta_gamma",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestKeyword::Alpha.to_string(), "alpha");
        assert_eq!(TestKeyword::BetaGamma.to_string(), "beta_gamma");
    }

    #[test]
    fn test_fromstr_mixed_case_and_padding() {
        assert_eq!(TestKeyword::from_str("ALPHA").unwrap(), TestKeyword::Alpha);
        assert_eq!(TestKeyword::from_str(" Beta_Gamma ").unwrap(), TestKeyword::BetaGamma);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestKeyword::from_str("delta");
        assert!(result.unwrap_err().contains("Invalid TestKeyword: delta"));
        assert!(TestKeyword::from_str("").is_err());
    }
}
