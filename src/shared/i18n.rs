use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Default language used when detection finds nothing usable.
pub const DEFAULT_LANGUAGE: Language = Language::English;

/// Languages the interface can be switched to.
///
/// Catalog tables exist for en/es/pt/fr/de; the remaining codes are valid
/// selections whose lookups resolve through the default catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// All supported languages, in switcher order.
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Spanish,
        Language::Portuguese,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Chinese,
    ];

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Portuguese => "pt",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, returning `None` for anything outside the
    /// supported set.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|lang| lang.code() == code)
    }

    /// Native display name shown in the language switcher.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Portuguese => "Português",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Italian => "Italiano",
            Language::Japanese => "日本語",
            Language::Chinese => "中文",
        }
    }

    /// Flag emoji shown next to the language name.
    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Spanish => "🇪🇸",
            Language::Portuguese => "🇧🇷",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Italian => "🇮🇹",
            Language::Japanese => "🇯🇵",
            Language::Chinese => "🇨🇳",
        }
    }

    /// Next language in switcher order, wrapping around.
    pub fn next(self) -> Language {
        let index = Language::ALL
            .iter()
            .position(|lang| *lang == self)
            .unwrap_or(0);
        Language::ALL[(index + 1) % Language::ALL.len()]
    }
}

/// Pick the active language from the available signals, in strict priority
/// order: explicit override, persisted choice, system locale (primary subtag
/// only), hardcoded default. Candidates outside the supported set are skipped.
pub fn detect_language(
    override_code: Option<&str>,
    stored_code: Option<&str>,
    system_locale: Option<&str>,
) -> Language {
    if let Some(lang) = override_code.and_then(Language::from_code) {
        return lang;
    }

    if let Some(lang) = stored_code.and_then(Language::from_code) {
        return lang;
    }

    // "en-US" and "en_US.UTF-8" both reduce to "en".
    if let Some(locale) = system_locale {
        let primary = locale.split(['-', '_', '.']).next().unwrap_or(locale);
        if let Some(lang) = Language::from_code(primary) {
            return lang;
        }
    }

    DEFAULT_LANGUAGE
}

const EN: &[(&str, &str)] = &[
    ("title", "🎨 Fun QRCode"),
    ("subtitle", "Transform your links into stylish QR codes"),
    ("urlLabel", "Enter your URL:"),
    ("urlPlaceholder", "https://example.com"),
    ("themeLabel", "Choose a theme:"),
    ("generateBtn", "Generate QR Code ✨"),
    ("theme.classic", "🔲 Classic"),
    ("theme.colorful", "🌈 Colorful"),
    ("theme.neon", "⚡ Neon"),
    ("theme.nature", "🌿 Nature"),
    ("downloadBtn", "📥 Download"),
    ("shareBtn", "📤 Share"),
    ("loading", "🔄 Generating QR Code..."),
    ("error.emptyUrl", "Please enter a valid URL"),
    ("error.invalidUrl", "Please enter a valid URL (include http:// or https://)"),
    ("error.generation", "Failed to generate QR code. Please try again."),
    ("error.download", "Download failed. Please try again."),
    ("success.saved", "QR code saved to {path}"),
    ("success.copied", "Link copied to clipboard!"),
    ("error.shareNotSupported", "Sharing not supported on this device"),
    ("share.title", "Fun QRCode"),
    ("share.text", "Check out this QR code for: {url}"),
    ("language.changed", "Language changed to {name}"),
    ("footer", "© 2025 Fun QRCode - Made with ❤️"),
];

const ES: &[(&str, &str)] = &[
    ("title", "🎨 QR Divertido"),
    ("subtitle", "Transforma tus enlaces en códigos QR con estilo"),
    ("urlLabel", "Introduce tu URL:"),
    ("urlPlaceholder", "https://ejemplo.com"),
    ("themeLabel", "Elige un tema:"),
    ("generateBtn", "Generar Código QR ✨"),
    ("theme.classic", "🔲 Clásico"),
    ("theme.colorful", "🌈 Colorido"),
    ("theme.neon", "⚡ Neón"),
    ("theme.nature", "🌿 Naturaleza"),
    ("downloadBtn", "📥 Descargar"),
    ("shareBtn", "📤 Compartir"),
    ("loading", "🔄 Generando Código QR..."),
    ("error.emptyUrl", "Por favor introduce una URL válida"),
    ("error.invalidUrl", "Por favor introduce una URL válida (incluye http:// o https://)"),
    ("error.generation", "Error al generar el código QR. Inténtalo de nuevo."),
    ("error.download", "Error en la descarga. Inténtalo de nuevo."),
    ("success.saved", "Código QR guardado en {path}"),
    ("success.copied", "¡Enlace copiado al portapapeles!"),
    ("error.shareNotSupported", "Compartir no compatible en este dispositivo"),
    ("share.title", "QR Divertido"),
    ("share.text", "Mira este código QR para: {url}"),
    ("language.changed", "Idioma cambiado a {name}"),
    ("footer", "© 2025 QR Divertido - Hecho con ❤️"),
];

const PT: &[(&str, &str)] = &[
    ("title", "🎨 QR Divertido"),
    ("subtitle", "Transforme seus links em códigos QR estilosos"),
    ("urlLabel", "Digite sua URL:"),
    ("urlPlaceholder", "https://exemplo.com"),
    ("themeLabel", "Escolha um tema:"),
    ("generateBtn", "Gerar Código QR ✨"),
    ("theme.classic", "🔲 Clássico"),
    ("theme.colorful", "🌈 Colorido"),
    ("theme.neon", "⚡ Neon"),
    ("theme.nature", "🌿 Natureza"),
    ("downloadBtn", "📥 Baixar"),
    ("shareBtn", "📤 Compartilhar"),
    ("loading", "🔄 Gerando Código QR..."),
    ("error.emptyUrl", "Por favor digite uma URL válida"),
    ("error.invalidUrl", "Por favor digite uma URL válida (inclua http:// ou https://)"),
    ("error.generation", "Falha ao gerar código QR. Tente novamente."),
    ("error.download", "Falha no download. Tente novamente."),
    ("success.saved", "Código QR salvo em {path}"),
    ("success.copied", "Link copiado para a área de transferência!"),
    ("error.shareNotSupported", "Compartilhamento não suportado neste dispositivo"),
    ("share.title", "QR Divertido"),
    ("share.text", "Confira este código QR para: {url}"),
    ("language.changed", "Idioma alterado para {name}"),
    ("footer", "© 2025 QR Divertido - Feito com ❤️"),
];

const FR: &[(&str, &str)] = &[
    ("title", "🎨 QR Amusant"),
    ("subtitle", "Transformez vos liens en codes QR stylés"),
    ("urlLabel", "Entrez votre URL:"),
    ("urlPlaceholder", "https://exemple.com"),
    ("themeLabel", "Choisissez un thème:"),
    ("generateBtn", "Générer le Code QR ✨"),
    ("theme.classic", "🔲 Classique"),
    ("theme.colorful", "🌈 Coloré"),
    ("theme.neon", "⚡ Néon"),
    ("theme.nature", "🌿 Nature"),
    ("downloadBtn", "📥 Télécharger"),
    ("shareBtn", "📤 Partager"),
    ("loading", "🔄 Génération du Code QR..."),
    ("error.emptyUrl", "Veuillez entrer une URL valide"),
    ("error.invalidUrl", "Veuillez entrer une URL valide (incluez http:// ou https://)"),
    ("error.generation", "Échec de la génération du code QR. Veuillez réessayer."),
    ("error.download", "Échec du téléchargement. Veuillez réessayer."),
    ("success.saved", "Code QR enregistré dans {path}"),
    ("success.copied", "Lien copié dans le presse-papiers!"),
    ("error.shareNotSupported", "Partage non pris en charge sur cet appareil"),
    ("share.title", "QR Amusant"),
    ("share.text", "Découvrez ce code QR pour: {url}"),
    ("language.changed", "Langue changée en {name}"),
    ("footer", "© 2025 QR Amusant - Fait avec ❤️"),
];

const DE: &[(&str, &str)] = &[
    ("title", "🎨 Spaß QR-Code"),
    ("subtitle", "Verwandeln Sie Ihre Links in stilvolle QR-Codes"),
    ("urlLabel", "Geben Sie Ihre URL ein:"),
    ("urlPlaceholder", "https://beispiel.com"),
    ("themeLabel", "Wählen Sie ein Theme:"),
    ("generateBtn", "QR-Code Generieren ✨"),
    ("theme.classic", "🔲 Klassisch"),
    ("theme.colorful", "🌈 Farbenfroh"),
    ("theme.neon", "⚡ Neon"),
    ("theme.nature", "🌿 Natur"),
    ("downloadBtn", "📥 Herunterladen"),
    ("shareBtn", "📤 Teilen"),
    ("loading", "🔄 QR-Code wird generiert..."),
    ("error.emptyUrl", "Bitte geben Sie eine gültige URL ein"),
    ("error.invalidUrl", "Bitte geben Sie eine gültige URL ein (mit http:// oder https://)"),
    ("error.generation", "QR-Code-Generierung fehlgeschlagen. Bitte versuchen Sie es erneut."),
    ("error.download", "Download fehlgeschlagen. Bitte versuchen Sie es erneut."),
    ("success.saved", "QR-Code gespeichert unter {path}"),
    ("success.copied", "Link in die Zwischenablage kopiert!"),
    ("error.shareNotSupported", "Teilen auf diesem Gerät nicht unterstützt"),
    ("share.title", "Spaß QR-Code"),
    ("share.text", "Schauen Sie sich diesen QR-Code an für: {url}"),
    ("language.changed", "Sprache geändert zu {name}"),
    ("footer", "© 2025 Spaß QR-Code - Mit ❤️ gemacht"),
];

type Catalog = HashMap<&'static str, &'static str>;

/// Two-level catalog, built once and read-only afterwards.
fn catalogs() -> &'static HashMap<Language, Catalog> {
    static CATALOGS: OnceLock<HashMap<Language, Catalog>> = OnceLock::new();

    CATALOGS.get_or_init(|| {
        let mut map = HashMap::new();
        map.insert(Language::English, EN.iter().copied().collect());
        map.insert(Language::Spanish, ES.iter().copied().collect());
        map.insert(Language::Portuguese, PT.iter().copied().collect());
        map.insert(Language::French, FR.iter().copied().collect());
        map.insert(Language::German, DE.iter().copied().collect());
        map
    })
}

/// Resolve a key against one language's catalog, then the default catalog.
fn lookup(language: Language, key: &str) -> Option<&'static str> {
    let catalogs = catalogs();
    if let Some(template) = catalogs.get(&language).and_then(|c| c.get(key)) {
        return Some(template);
    }
    catalogs
        .get(&DEFAULT_LANGUAGE)
        .and_then(|c| c.get(key))
        .copied()
}

/// Translation resolver for UI text.
///
/// Resolution never fails: missing keys echo the key itself, missing params
/// leave their `{placeholder}` verbatim, and unsupported language codes are
/// ignored.
#[derive(Debug, Clone)]
pub struct I18n {
    language: Language,
}

impl I18n {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a key with no parameters.
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    /// Translate a key, substituting the first occurrence of each `{name}`
    /// placeholder with the matching parameter value.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = lookup(self.language, key).unwrap_or(key).to_string();

        for (name, value) in params {
            let placeholder = format!("{{{name}}}");
            text = text.replacen(&placeholder, value, 1);
        }

        text
    }

    /// Switch the active language. Returns `true` when the code is supported
    /// and the switch happened; unsupported codes leave the active language
    /// unchanged.
    #[must_use]
    pub fn set_language(&mut self, code: &str) -> bool {
        match Language::from_code(code) {
            Some(language) => {
                self.language = language;
                true
            }
            None => false,
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_key_uses_active_language() {
        let i18n = I18n::new(Language::Spanish);
        assert_eq!(i18n.t("downloadBtn"), "📥 Descargar");
        assert_eq!(i18n.t("share.title"), "QR Divertido");
    }

    #[test]
    fn test_missing_catalog_falls_back_to_default() {
        // it/ja/zh have no catalog tables, so every key resolves via en.
        let i18n = I18n::new(Language::Japanese);
        assert_eq!(i18n.t("downloadBtn"), "📥 Download");
    }

    #[test]
    fn test_unknown_key_echoes_key() {
        let i18n = I18n::new(Language::English);
        assert_eq!(i18n.t("nonexistent.key"), "nonexistent.key");

        let i18n = I18n::new(Language::German);
        assert_eq!(i18n.t("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn test_param_substitution() {
        let i18n = I18n::new(Language::English);
        assert_eq!(
            i18n.t_with("share.text", &[("url", "http://a.b")]),
            "Check out this QR code for: http://a.b"
        );
    }

    #[test]
    fn test_param_substitution_first_occurrence_only() {
        // Unknown keys echo through, so a synthetic template with a repeated
        // placeholder pins the single-substitution contract directly.
        let i18n = I18n::new(Language::English);
        assert_eq!(i18n.t_with("{x} and {x}", &[("x", "y")]), "y and {x}");
    }

    #[test]
    fn test_missing_param_leaves_placeholder() {
        let i18n = I18n::new(Language::English);
        assert_eq!(
            i18n.t_with("share.text", &[]),
            "Check out this QR code for: {url}"
        );
    }

    #[test]
    fn test_set_language_supported() {
        let mut i18n = I18n::new(Language::English);
        assert!(i18n.set_language("fr"));
        assert_eq!(i18n.language(), Language::French);
    }

    #[test]
    fn test_set_language_unsupported_is_noop() {
        let mut i18n = I18n::new(Language::Portuguese);
        assert!(!i18n.set_language("xx"));
        assert!(!i18n.set_language(""));
        assert_eq!(i18n.language(), Language::Portuguese);
    }

    #[test]
    fn test_detect_override_beats_stored() {
        let lang = detect_language(Some("es"), Some("de"), Some("fr-FR"));
        assert_eq!(lang, Language::Spanish);
    }

    #[test]
    fn test_detect_stored_beats_system_locale() {
        let lang = detect_language(None, Some("de"), Some("fr-FR"));
        assert_eq!(lang, Language::German);
    }

    #[test]
    fn test_detect_system_locale_primary_subtag() {
        assert_eq!(
            detect_language(None, None, Some("pt-BR")),
            Language::Portuguese
        );
        assert_eq!(
            detect_language(None, None, Some("ja_JP.UTF-8")),
            Language::Japanese
        );
    }

    #[test]
    fn test_detect_skips_unsupported_candidates() {
        // An unsupported override loses the race to the stored preference.
        assert_eq!(
            detect_language(Some("ko"), Some("it"), None),
            Language::Italian
        );
        // Everything unsupported lands on the default.
        assert_eq!(
            detect_language(Some("ko"), Some("xx"), Some("ru-RU")),
            DEFAULT_LANGUAGE
        );
    }

    #[test]
    fn test_detect_default_when_no_signals() {
        assert_eq!(detect_language(None, None, None), DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_language_code_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_language_cycle_covers_all() {
        let mut lang = Language::English;
        for _ in 0..Language::ALL.len() {
            lang = lang.next();
        }
        assert_eq!(lang, Language::English);
    }
}
