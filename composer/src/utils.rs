use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::constants::{KB, MB};

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
        Ok(re) => Some(re),
        Err(err) => {
            log::error!("email pattern: {:?}", err);
            None
        }
    }
});

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.as_ref().map(|re| re.is_match(email)).unwrap_or_default()
}

pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_validate_conventional_addresses() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("first.last+tag@mail.example.org"));
        assert!(!validate_email(""));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("user@localhost"));
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email("user@exa mple.com"));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn test_new_id_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }

    proptest! {
        #[test]
        fn test_without_at_is_invalid(s in "[^@]{0,40}") {
            prop_assert!(!validate_email(&s));
        }

        #[test]
        fn test_domain_without_dot_is_invalid(local in "[a-z0-9]{1,12}", domain in "[a-z0-9-]{1,12}") {
            let address = format!("{local}@{domain}");
            prop_assert!(!validate_email(&address));
        }

        #[test]
        fn test_generated_addresses_are_valid(local in "[a-z0-9._]{1,12}", host in "[a-z0-9]{1,12}", tld in "[a-z]{2,6}") {
            let address = format!("{local}@{host}.{tld}");
            prop_assert!(validate_email(&address));
        }
    }
}
