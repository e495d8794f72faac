//! String-labelled enums shared by the wire format, the CLI, and display code.

/// Declares a fieldless enum whose variants serialize to fixed snake_case
/// labels, with `as_str`, `Display`, `FromStr` and an `ALL` listing.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    other => Err($crate::CoreError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Turn a snake_case label into words: underscores become spaces and each
/// word gets an upper-case first letter. `"cut_sew"` → `"Cut Sew"`.
#[must_use]
pub(crate) fn humanize(label: &str) -> String {
    label
        .split(|c: char| c == '_' || c == ' ')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::humanize;

    #[test]
    fn humanize_replaces_underscores() {
        assert_eq!(humanize("cut_sew"), "Cut Sew");
        assert_eq!(humanize("fabric_supplier"), "Fabric Supplier");
    }

    #[test]
    fn humanize_keeps_existing_capitals() {
        assert_eq!(humanize("Pattern Making"), "Pattern Making");
        assert_eq!(humanize("OEKO-TEX"), "OEKO-TEX");
    }

    #[test]
    fn humanize_single_word() {
        assert_eq!(humanize("rtw"), "Rtw");
        assert_eq!(humanize(""), "");
    }
}
