//! # Object Layout Constants
//!
//! Field offsets and object sizes for the engine structures the toolset
//! inspects, plus unit multipliers. These are plain numbers; combine them with
//! [`Int64`](crate::Int64) arithmetic to compute addresses:
//!
//! ```
//! use lohi_core::{layout, Int64};
//!
//! let obj = Int64::from_halves(0x1000_0000, 0x1);
//! let butterfly = obj + layout::JS_BUTTERFLY;
//! assert_eq!(butterfly.low(), 0x1000_0008);
//! ```

// JSC::JSObject
pub const JS_BUTTERFLY: u32 = 0x8;
/// Start of the inline property array (JSValues)
pub const JS_INLINE_PROP: u32 = 0x10;
pub const SIZE_JSOBJ: u32 = JS_INLINE_PROP;

// JSC::JSArrayBufferView
pub const VIEW_M_VECTOR: u32 = 0x10;
pub const VIEW_M_LENGTH: u32 = 0x18;
pub const VIEW_M_MODE: u32 = 0x1c;
pub const SIZE_VIEW: u32 = 0x20;

// WTF::StringImpl
pub const STRIMPL_STRLEN: u32 = 4;
pub const STRIMPL_M_DATA: u32 = 8;
pub const STRIMPL_INLINE_STR: u32 = 0x14;
pub const SIZE_STRIMPL: u32 = 0x18;

// WebCore::JSHTMLTextAreaElement
/// `m_wrapped`, pointer to the wrapped HTMLTextAreaElement
pub const JSTA_IMPL: u32 = 0x18;
pub const SIZE_JSTA: u32 = 0x20;

pub const KB: u32 = 1024;
pub const MB: u32 = KB * KB;
pub const GB: u32 = KB * KB * KB;
/// Page size on the target console
pub const PAGE_SIZE: u32 = 16 * KB;

/// Every constant by its lowercase name
pub const ALL: &[(&str, u32)] = &[
    ("js_butterfly", JS_BUTTERFLY),
    ("js_inline_prop", JS_INLINE_PROP),
    ("size_jsobj", SIZE_JSOBJ),
    ("view_m_vector", VIEW_M_VECTOR),
    ("view_m_length", VIEW_M_LENGTH),
    ("view_m_mode", VIEW_M_MODE),
    ("size_view", SIZE_VIEW),
    ("strimpl_strlen", STRIMPL_STRLEN),
    ("strimpl_m_data", STRIMPL_M_DATA),
    ("strimpl_inline_str", STRIMPL_INLINE_STR),
    ("size_strimpl", SIZE_STRIMPL),
    ("jsta_impl", JSTA_IMPL),
    ("size_jsta", SIZE_JSTA),
    ("kb", KB),
    ("mb", MB),
    ("gb", GB),
    ("page_size", PAGE_SIZE),
];

/// Look up a constant by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<u32> {
    ALL.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, v)| v)
}
