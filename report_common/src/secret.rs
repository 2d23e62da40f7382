use std::{
    fmt,
    fmt::{Debug, Display},
};

/// Holds a credential (API keys, access tokens) so that it never leaks into log output. Both `Debug` and `Display`
/// print a mask; call [`Secret::reveal`] at the point where the raw value is really needed.
#[derive(Clone, Default)]
pub struct Secret<T>
where T: Clone + Default
{
    value: T,
}

impl<T: Clone + Default> Secret<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn reveal(&self) -> &T {
        &self.value
    }
}

impl<T: Clone + Default> Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

impl<T: Clone + Default> Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("****")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn secrets_are_masked() {
        let key = Secret::new("SG.super-secret-key".to_string());
        assert_eq!(format!("{key}"), "****");
        assert_eq!(format!("{key:?}"), "****");
        assert_eq!(key.reveal(), "SG.super-secret-key");
    }

    #[test]
    fn masked_inside_structs() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Creds {
            user: String,
            token: Secret<String>,
        }
        let creds = Creds { user: "reports".into(), token: Secret::new("shpat_123".to_string()) };
        let dbg = format!("{creds:?}");
        assert!(dbg.contains("reports"));
        assert!(!dbg.contains("shpat_123"));
    }
}
