use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// UI languages the app ships strings for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Uz,
    Ru,
    En,
}

/// Identifiers for translatable strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    SearchPlaceholder,
    CatalogTitle,
    QueryEcho,
    QueryEmpty,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Uz, Locale::Ru, Locale::En];

    /// Look up the string for `key` in this locale
    pub fn text(self, key: Key) -> &'static str {
        match (self, key) {
            (Locale::Uz, Key::SearchPlaceholder) => "Mahsulotlarni qidirish",
            (Locale::Ru, Key::SearchPlaceholder) => "Поиск товаров",
            (Locale::En, Key::SearchPlaceholder) => "Search products",

            (Locale::Uz, Key::CatalogTitle) => "Mahsulotlar",
            (Locale::Ru, Key::CatalogTitle) => "Товары",
            (Locale::En, Key::CatalogTitle) => "Products",

            (Locale::Uz, Key::QueryEcho) => "Qidiruv so'rovi",
            (Locale::Ru, Key::QueryEcho) => "Запрос",
            (Locale::En, Key::QueryEcho) => "Query",

            (Locale::Uz, Key::QueryEmpty) => "Qidirish uchun yozing",
            (Locale::Ru, Key::QueryEmpty) => "Начните вводить для поиска",
            (Locale::En, Key::QueryEmpty) => "Start typing to search",
        }
    }

    /// Lowercase language code, as stored in the settings file
    pub fn code(self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Parse a language code or tag such as `uz`, `RU` or `en-US`
    pub fn from_code(code: &str) -> Option<Locale> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        Locale::ALL.into_iter().find(|locale| locale.code() == lang)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Locale::from_code(&code)
            .ok_or_else(|| de::Error::custom(format!("unsupported locale: {}", code)))
    }
}
