//! Localized column names.
//!
//! Keys look like `hours-full-singular`: unit, style, then number. Only a
//! binary singular/plural split is supported.

use super::unit::{Unit, UnitsStyle};
use std::collections::HashMap;

/// Resolves a localization key to display text.
pub trait StringResolver {
    fn resolve(&self, key: &str) -> Option<String>;
}

impl<F> StringResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, key: &str) -> Option<String> {
        self(key)
    }
}

pub fn label_key(unit: Unit, style: UnitsStyle, count: usize) -> String {
    let number = if count == 1 { "singular" } else { "plural" };
    format!("{}-{}-{}", unit.key(), style.key(), number)
}

/// Label text for `count` of `unit`. Unknown keys render as the key.
pub fn unit_label(resolver: &dyn StringResolver, unit: Unit, style: UnitsStyle, count: usize) -> String {
    let key = label_key(unit, style, count);
    match resolver.resolve(&key) {
        Some(text) => text,
        None => {
            log::debug!("no localization for key '{key}'");
            key
        }
    }
}

/// Built-in English names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishStrings;

impl EnglishStrings {
    fn lookup(unit: Unit, style: UnitsStyle, singular: bool) -> &'static str {
        // (singular, plural) per style
        let (full, short, abbreviated) = match unit {
            Unit::Seconds => (("second", "seconds"), ("sec", "secs"), "s"),
            Unit::Minutes => (("minute", "minutes"), ("min", "mins"), "m"),
            Unit::Hours => (("hour", "hours"), ("hr", "hrs"), "h"),
            Unit::Days => (("day", "days"), ("day", "days"), "d"),
            Unit::Weeks => (("week", "weeks"), ("wk", "wks"), "w"),
            Unit::Months => (("month", "months"), ("mo", "mos"), "mo"),
            Unit::Years => (("year", "years"), ("yr", "yrs"), "y"),
        };
        let pick = |(one, many): (&'static str, &'static str)| if singular { one } else { many };
        match style {
            UnitsStyle::Full => pick(full),
            UnitsStyle::Short => pick(short),
            UnitsStyle::Abbreviated => abbreviated,
        }
    }
}

impl StringResolver for EnglishStrings {
    fn resolve(&self, key: &str) -> Option<String> {
        let mut parts = key.splitn(3, '-');
        let unit: Unit = parts.next()?.parse().ok()?;
        let style = match parts.next()? {
            "full" => UnitsStyle::Full,
            "short" => UnitsStyle::Short,
            "abbreviated" => UnitsStyle::Abbreviated,
            _ => return None,
        };
        let singular = match parts.next()? {
            "singular" => true,
            "plural" => false,
            _ => return None,
        };
        Some(Self::lookup(unit, style, singular).to_string())
    }
}

/// Explicit key table layered over a fallback resolver.
pub struct TableResolver<R> {
    table: HashMap<String, String>,
    fallback: R,
}

impl<R: StringResolver> TableResolver<R> {
    pub fn new(table: HashMap<String, String>, fallback: R) -> Self {
        Self { table, fallback }
    }
}

impl<R: StringResolver> StringResolver for TableResolver<R> {
    fn resolve(&self, key: &str) -> Option<String> {
        self.table
            .get(key)
            .cloned()
            .or_else(|| self.fallback.resolve(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_only_for_one() {
        let en = EnglishStrings;
        for unit in Unit::ALL {
            let one = unit_label(&en, unit, UnitsStyle::Full, 1);
            let zero = unit_label(&en, unit, UnitsStyle::Full, 0);
            let many = unit_label(&en, unit, UnitsStyle::Full, 2);
            assert_eq!(format!("{one}s"), zero, "{unit}");
            assert_eq!(zero, many);
        }
    }

    #[test]
    fn test_styles() {
        let en = EnglishStrings;
        assert_eq!(unit_label(&en, Unit::Hours, UnitsStyle::Short, 3), "hrs");
        assert_eq!(unit_label(&en, Unit::Minutes, UnitsStyle::Short, 1), "min");
        assert_eq!(unit_label(&en, Unit::Seconds, UnitsStyle::Abbreviated, 1), "s");
        assert_eq!(unit_label(&en, Unit::Months, UnitsStyle::Abbreviated, 4), "mo");
    }

    #[test]
    fn test_table_overrides_fallback() {
        let mut table = HashMap::new();
        table.insert("hours-full-plural".to_string(), "Stunden".to_string());
        let resolver = TableResolver::new(table, EnglishStrings);

        assert_eq!(unit_label(&resolver, Unit::Hours, UnitsStyle::Full, 5), "Stunden");
        assert_eq!(unit_label(&resolver, Unit::Hours, UnitsStyle::Full, 1), "hour");
    }

    #[test]
    fn test_missing_key_renders_key() {
        let empty = |_: &str| -> Option<String> { None };
        assert_eq!(
            unit_label(&empty, Unit::Days, UnitsStyle::Full, 1),
            "days-full-singular"
        );
    }
}
