use dom_bridge::{DomPort, NodeId};
use promptstash_core_types::{InsertionMode, KeyEvent};

/// Reads the current surface content as normalized plain text.
pub type ExtractFn = fn(&dyn DomPort, NodeId) -> Option<String>;

/// Decides whether a key event is a submit gesture on this host.
/// Must be pure; it runs on every key event regardless of focus target.
pub type KeyTriggerFn = fn(&KeyEvent) -> bool;

/// The closed set of supported services.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ServiceId {
    ChatGpt,
    Claude,
    Gemini,
    DeepSeek,
    Grok,
    Perplexity,
    Felo,
}

impl ServiceId {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceId::ChatGpt => "chatgpt",
            ServiceId::Claude => "claude",
            ServiceId::Gemini => "gemini",
            ServiceId::DeepSeek => "deepseek",
            ServiceId::Grok => "grok",
            ServiceId::Perplexity => "perplexity",
            ServiceId::Felo => "felo",
        }
    }
}

/// Where the UI layer should place the suggestion popup on this host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PopupAlign {
    AboveInput,
    BelowInput,
    CaretRelative,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PopupPlacement {
    pub align: PopupAlign,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl PopupPlacement {
    pub const fn above() -> Self {
        Self {
            align: PopupAlign::AboveInput,
            offset_x: 0,
            offset_y: -8,
        }
    }
}

/// Everything the core needs to know about one host, fixed at build time.
///
/// `text_input_selectors` is ordered specific-first: the first selector
/// yielding an attached, visible element wins. `insertion_mode` records a
/// structural fact about the host's UI framework and is never detected at
/// runtime.
pub struct SiteCapability {
    pub service: ServiceId,
    /// Hostnames (matched as the host itself or any subdomain of it).
    pub host_suffixes: &'static [&'static str],
    /// When present, the page path must start with this prefix.
    pub path_prefix: Option<&'static str>,
    pub text_input_selectors: &'static [&'static str],
    pub send_trigger_selectors: &'static [&'static str],
    pub popup_placement: PopupPlacement,
    pub extract: ExtractFn,
    pub insertion_mode: InsertionMode,
    pub key_trigger: KeyTriggerFn,
    pub debounce_ms: u64,
}

impl SiteCapability {
    /// Hostname match: exact host or a subdomain of a registered suffix.
    pub fn matches(&self, host: &str, path: &str) -> bool {
        let host_ok = self
            .host_suffixes
            .iter()
            .any(|suffix| host == *suffix || host.ends_with(&format!(".{suffix}")));
        let path_ok = self
            .path_prefix
            .map(|prefix| path.starts_with(prefix))
            .unwrap_or(true);
        host_ok && path_ok
    }
}

impl std::fmt::Debug for SiteCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteCapability")
            .field("service", &self.service)
            .field("host_suffixes", &self.host_suffixes)
            .field("insertion_mode", &self.insertion_mode)
            .finish_non_exhaustive()
    }
}
