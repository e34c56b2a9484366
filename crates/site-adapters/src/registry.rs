//! Builtin adapter table and the host resolver.

use once_cell::sync::Lazy;
use tracing::debug;

use dom_bridge::{DomPort, NodeId};
use promptstash_core_types::InsertionMode;

use crate::model::{PopupAlign, PopupPlacement, ServiceId, SiteCapability};
use crate::triggers;

static REGISTRY: Lazy<Vec<SiteCapability>> = Lazy::new(|| {
    vec![
        // ChatGPT renders a ProseMirror editor; direct writes are reverted
        // by its reconciliation, hence legacy insertion.
        SiteCapability {
            service: ServiceId::ChatGpt,
            host_suffixes: &["chatgpt.com", "chat.openai.com"],
            path_prefix: None,
            text_input_selectors: &[
                "#prompt-textarea",
                "div.ProseMirror[contenteditable='true']",
                "div[contenteditable='true']",
            ],
            send_trigger_selectors: &["button[data-testid='send-button']"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_rich_text,
            insertion_mode: InsertionMode::Legacy,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        SiteCapability {
            service: ServiceId::Claude,
            host_suffixes: &["claude.ai"],
            path_prefix: None,
            text_input_selectors: &[
                "div.ProseMirror[contenteditable='true']",
                "div[contenteditable='true']",
            ],
            send_trigger_selectors: &["button[aria-label='Send message']"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_rich_text,
            insertion_mode: InsertionMode::Legacy,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        // Gemini uses a Quill editor.
        SiteCapability {
            service: ServiceId::Gemini,
            host_suffixes: &["gemini.google.com"],
            path_prefix: None,
            text_input_selectors: &[
                "rich-textarea div.ql-editor",
                "div.ql-editor[contenteditable='true']",
            ],
            send_trigger_selectors: &["button.send-button"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_rich_text,
            insertion_mode: InsertionMode::Legacy,
            key_trigger: triggers::plain_enter,
            debounce_ms: 300,
        },
        SiteCapability {
            service: ServiceId::DeepSeek,
            host_suffixes: &["chat.deepseek.com"],
            path_prefix: None,
            text_input_selectors: &["textarea#chat-input", "textarea"],
            send_trigger_selectors: &["div[role='button'].send"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_surface,
            insertion_mode: InsertionMode::Modern,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        // Grok lives both on its own host and under x.com/i/grok.
        SiteCapability {
            service: ServiceId::Grok,
            host_suffixes: &["grok.com"],
            path_prefix: None,
            text_input_selectors: &["textarea[aria-label]", "textarea"],
            send_trigger_selectors: &["button[type='submit']"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_surface,
            insertion_mode: InsertionMode::Modern,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        SiteCapability {
            service: ServiceId::Grok,
            host_suffixes: &["x.com", "twitter.com"],
            path_prefix: Some("/i/grok"),
            text_input_selectors: &["textarea[aria-label]", "textarea"],
            send_trigger_selectors: &["button[type='submit']"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_surface,
            insertion_mode: InsertionMode::Modern,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        SiteCapability {
            service: ServiceId::Perplexity,
            host_suffixes: &["perplexity.ai"],
            path_prefix: None,
            text_input_selectors: &["textarea[placeholder]", "textarea"],
            send_trigger_selectors: &["button[aria-label='Submit']"],
            popup_placement: PopupPlacement {
                align: PopupAlign::BelowInput,
                offset_x: 0,
                offset_y: 8,
            },
            extract: surface_io::read_surface,
            insertion_mode: InsertionMode::Modern,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
        SiteCapability {
            service: ServiceId::Felo,
            host_suffixes: &["felo.ai"],
            path_prefix: None,
            text_input_selectors: &["textarea"],
            send_trigger_selectors: &["button[type='submit']"],
            popup_placement: PopupPlacement::above(),
            extract: surface_io::read_surface,
            insertion_mode: InsertionMode::Modern,
            key_trigger: triggers::plain_enter,
            debounce_ms: 200,
        },
    ]
});

/// Capability for the given host/path, or `None` when the host is not
/// supported. First matching record wins.
pub fn resolve(host: &str, path: &str) -> Option<&'static SiteCapability> {
    let found = REGISTRY.iter().find(|cap| cap.matches(host, path));
    match &found {
        Some(cap) => debug!(host, service = cap.service.name(), "resolved site adapter"),
        None => debug!(host, "no site adapter for host"),
    }
    found
}

/// Service names of every registered adapter, deduplicated in order.
pub fn supported_services() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for cap in REGISTRY.iter() {
        if !names.contains(&cap.service.name()) {
            names.push(cap.service.name());
        }
    }
    names
}

/// Walk the capability's selector list and return the first attached,
/// visible element. Selector order is authoritative: specific selectors
/// are registered before generic fallbacks.
pub fn select_input(dom: &dyn DomPort, cap: &SiteCapability) -> Option<NodeId> {
    for selector in cap.text_input_selectors {
        match dom.query_selector(selector) {
            Some(node) if dom.is_visible(node) => {
                debug!(selector, "input surface matched");
                return Some(node);
            }
            Some(_) => debug!(selector, "matched element not visible, trying next"),
            None => debug!(selector, "no match, trying next"),
        }
    }
    None
}
