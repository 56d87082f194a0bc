/*!
Serde support for optional values.

An empty value is written as the format's null (`null` in JSON). A present
value is written exactly like the value it holds, without any envelope.
Consequently a present value whose own representation is null, such as
`Optional::of(None::<i32>)`, cannot be told apart from an empty one and
reads back as empty.

Struct fields of type [`Optional`] need `#[serde(default)]` to accept a
missing key:

```
# #[cfg(feature = "json")]
# {
use optional::Optional;
use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    #[serde(default)]
    port: Optional<u16>,
}

let config: Config = serde_json::from_str("{}").unwrap();
assert!(!config.port.is_present());
# }
```
*/

use crate::value::Optional;

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}

#[cfg(feature = "json")]
mod json {
    use crate::value::Optional;

    use ::serde::de::DeserializeOwned;
    use ::serde::Serialize;
    use log::trace;

    impl<T: Serialize> Optional<T> {
        /// Converts the value to JSON. If the `Optional` is empty, then the
        /// result is `null`.
        ///
        /// # Examples
        ///
        /// ```
        /// use optional::Optional;
        ///
        /// assert_eq!(Optional::of(4).marshal_json().unwrap(), b"4");
        /// assert_eq!(Optional::<bool>::empty().marshal_json().unwrap(), b"null");
        /// ```
        pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>> {
            serde_json::to_vec(self)
        }

        pub fn to_json_string(&self) -> serde_json::Result<String> {
            serde_json::to_string(self)
        }
    }

    impl<T: DeserializeOwned> Optional<T> {
        /// Parses a JSON document into a new `Optional`.
        pub fn from_json(data: &[u8]) -> serde_json::Result<Self> {
            serde_json::from_slice(data)
        }

        /// Replaces the contents of this `Optional` with the given JSON value.
        ///
        /// If the JSON value is `null`, then the result is empty. Otherwise,
        /// the JSON is parsed the same way values of type `T` are parsed. The
        /// previous contents are discarded in every case; on error the
        /// `Optional` is left empty and the parser's error is returned.
        ///
        /// # Examples
        ///
        /// ```
        /// use optional::Optional;
        ///
        /// let mut value = Optional::of(7);
        /// value.unmarshal_json(b"1").unwrap();
        /// assert_eq!(value, Optional::of(1));
        ///
        /// assert!(value.unmarshal_json(b"true").is_err());
        /// assert!(!value.is_present());
        /// ```
        pub fn unmarshal_json(&mut self, data: &[u8]) -> serde_json::Result<()> {
            *self = Optional::empty();
            let value = Self::from_json(data).map_err(|err| {
                trace!("unable to unmarshal optional value: {}", err);
                err
            })?;
            trace!(
                "unmarshaled optional value (present: {})",
                value.is_present()
            );
            *self = value;
            Ok(())
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use crate::value::Optional;

    use ::serde::{Deserialize, Serialize};
    use log::LevelFilter;
    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn init_logger() {
        // tests share the global logger, only the first init succeeds
        simplelog::TestLogger::init(LevelFilter::Trace, simplelog::Config::default()).ok();
    }

    #[test]
    fn test_marshal_empty() {
        assert_eq!(Optional::<bool>::empty().to_json_string().unwrap(), "null");
    }

    #[test]
    fn test_marshal_full() {
        assert_eq!(Optional::of(4).to_json_string().unwrap(), "4");
        assert_eq!(Optional::of(true).to_json_string().unwrap(), "true");
        assert_eq!(Optional::of(None::<i32>).to_json_string().unwrap(), "null");
        assert_eq!(Optional::of("foo").to_json_string().unwrap(), "\"foo\"");
        assert_eq!(Optional::of(4).marshal_json().unwrap(), b"4".to_vec());
    }

    #[test]
    fn test_unmarshal_null() {
        init_logger();
        let mut value = Optional::<i32>::empty();
        assert!(value.unmarshal_json(b"null").is_ok());
        assert!(!value.is_present());

        let mut value = Optional::of(3);
        assert!(value.unmarshal_json(b"null").is_ok());
        assert!(!value.is_present());
    }

    #[test]
    fn test_unmarshal_right_type() {
        init_logger();
        let mut value = Optional::<i32>::empty();
        assert!(value.unmarshal_json(b"1").is_ok());
        assert_eq!(value, Optional::of(1));

        let mut value = Optional::<String>::of("bar".into());
        assert!(value.unmarshal_json(b" \"foo\" ").is_ok());
        assert_eq!(value, Optional::of("foo".to_string()));
    }

    #[test]
    fn test_unmarshal_wrong_type() {
        init_logger();
        let mut value = Optional::<i32>::empty();
        assert!(value.unmarshal_json(b"true").is_err());
        assert!(!value.is_present());

        let mut value = Optional::of(5);
        let err = value.unmarshal_json(b"\"five\"").unwrap_err();
        assert!(err.is_data());
        assert!(!value.is_present());

        let mut value = Optional::of(5);
        let err = value.unmarshal_json(b"{").unwrap_err();
        assert!(err.is_data());
        assert!(!value.is_present());

        let mut value = Optional::of(5);
        let err = value.unmarshal_json(b"  ").unwrap_err();
        assert!(err.is_eof());
        assert!(!value.is_present());
    }

    #[test]
    fn test_null_value_reads_back_empty() {
        let wire = Optional::of(None::<i32>).marshal_json().unwrap();
        let value = Optional::<Option<i32>>::from_json(&wire).unwrap();
        assert!(!value.is_present());
    }

    #[test]
    fn test_round_trip() {
        let mut rng = XorShiftRng::seed_from_u64(0x0f7_10ba1);
        for _ in 0..1000 {
            let expected = Optional::of(rng.gen::<i64>());
            let wire = expected.marshal_json().unwrap();
            assert_eq!(Optional::<i64>::from_json(&wire).unwrap(), expected);
        }

        let wire = Optional::<i64>::empty().marshal_json().unwrap();
        assert_eq!(Optional::<i64>::from_json(&wire).unwrap(), Optional::empty());
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Listener {
        host: String,
        #[serde(default)]
        port: Optional<u16>,
    }

    #[test]
    fn test_struct_field() {
        let listener: Listener = serde_json::from_str(r#"{"host":"localhost"}"#).unwrap();
        assert_eq!(listener.port, Optional::empty());

        let listener: Listener =
            serde_json::from_str(r#"{"host":"localhost","port":8080}"#).unwrap();
        assert_eq!(listener.port, Optional::of(8080));
        assert_eq!(
            serde_json::to_string(&listener).unwrap(),
            r#"{"host":"localhost","port":8080}"#
        );

        let listener = Listener {
            host: "localhost".into(),
            port: Optional::empty(),
        };
        assert_eq!(
            serde_json::to_string(&listener).unwrap(),
            r#"{"host":"localhost","port":null}"#
        );
    }
}
