use super::*;

impl Config {
    /// Find a value by dot-separated path, e.g. `"database.credentials.user"`.
    ///
    /// Empty segments are ignored, so `""` (or `"."`) returns the root group.
    ///
    /// # Errors
    /// `NotAGroup` when a segment would descend into a non-group value,
    /// `SettingNotFound` when a group has no such key.
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        let mut current = &self.root;

        for segment in path.split('.').filter(|s| !s.is_empty()) {
            let Value::Group(entries) = current else {
                return Err(ConfigError::NotAGroup {
                    segment: segment.to_string(),
                });
            };
            current = entries
                .get(segment)
                .ok_or_else(|| ConfigError::SettingNotFound {
                    segment: segment.to_string(),
                })?;
        }

        Ok(current)
    }

    /// A 32-bit integer. An `int64` value is accepted when it fits.
    pub fn lookup_int(&self, path: &str) -> Result<i32> {
        match self.lookup(path)? {
            Value::Int(n) => Ok(*n),
            Value::Int64(n) => i32::try_from(*n).map_err(|_| ConfigError::IntegerOutOfRange {
                path: path.to_string(),
                value: *n,
            }),
            other => Err(type_mismatch(path, ValueKind::Int, other)),
        }
    }

    /// A 64-bit integer. Plain `int` values are widened.
    pub fn lookup_int64(&self, path: &str) -> Result<i64> {
        match self.lookup(path)? {
            Value::Int(n) => Ok(i64::from(*n)),
            Value::Int64(n) => Ok(*n),
            other => Err(type_mismatch(path, ValueKind::Int64, other)),
        }
    }

    pub fn lookup_float(&self, path: &str) -> Result<f64> {
        match self.lookup(path)? {
            Value::Float(f) => Ok(*f),
            other => Err(type_mismatch(path, ValueKind::Float, other)),
        }
    }

    pub fn lookup_bool(&self, path: &str) -> Result<bool> {
        match self.lookup(path)? {
            Value::Bool(b) => Ok(*b),
            other => Err(type_mismatch(path, ValueKind::Bool, other)),
        }
    }

    pub fn lookup_string(&self, path: &str) -> Result<&str> {
        match self.lookup(path)? {
            Value::String(s) => Ok(s),
            other => Err(type_mismatch(path, ValueKind::String, other)),
        }
    }

    /// Get a typed value using dot notation.
    ///
    /// # Examples
    /// ```
    /// # use libconfig::Config;
    /// # use std::str::FromStr;
    /// # fn main() -> Result<(), libconfig::ConfigError> {
    /// let config = Config::from_str(r#"server = { host = "localhost"; port = 8080; };"#)?;
    /// let host: String = config.get("server.host")?;
    /// let port: u16 = config.get("server.port")?;
    /// assert_eq!((host.as_str(), port), ("localhost", 8080));
    /// # Ok(())
    /// # }
    /// ```
    pub fn get<T>(&self, path: &str) -> Result<T>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        let value = self.lookup(path)?.clone();
        T::try_from(value).map_err(|e| with_path(e, path))
    }

    /// Like [`Config::get`], but a missing setting gives `Ok(None)`.
    ///
    /// Descending into a non-group or a type mismatch is still an error.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(ConfigError::SettingNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = ConfigError>,
    {
        self.get(path).unwrap_or(default)
    }

    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// Setting names of the group at `path`, in document order.
    pub fn keys(&self, path: &str) -> Result<Vec<String>> {
        match self.lookup(path)? {
            Value::Group(entries) => Ok(entries.keys().cloned().collect()),
            other => Err(type_mismatch(path, ValueKind::Group, other)),
        }
    }
}

/// Conversions don't know where their value came from; fill the path in.
fn with_path(e: ConfigError, path: &str) -> ConfigError {
    match e {
        ConfigError::TypeMismatch { expected, found, .. } => ConfigError::TypeMismatch {
            path: path.to_string(),
            expected,
            found,
        },
        ConfigError::IntegerOutOfRange { value, .. } => ConfigError::IntegerOutOfRange {
            path: path.to_string(),
            value,
        },
        other => other,
    }
}
