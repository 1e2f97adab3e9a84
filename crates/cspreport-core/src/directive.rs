//! Directive and disposition classification.
//!
//! Browsers put free text into `violated-directive` (the directive name
//! followed by the policy source list). Only the first token is meaningful
//! for metrics, and only a fixed set of names is accepted as a label value so
//! that a misbehaving client cannot blow up series cardinality.

use std::fmt;

/// Label used for anything outside the known set.
pub const UNKNOWN: &str = "unknown";

/// Known CSP fetch/document directives.
///
/// See <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Content-Security-Policy>.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    ChildSrc,
    ConnectSrc,
    DefaultSrc,
    FontSrc,
    FrameSrc,
    ImgSrc,
    ManifestSrc,
    MediaSrc,
    ObjectSrc,
    PrefetchSrc,
    ScriptSrc,
    ScriptSrcElem,
    ScriptSrcAttr,
    StyleSrc,
    StyleSrcElem,
    WorkerSrc,
    BaseUri,
    /// Anything not in the list above (including empty input).
    Unknown,
}

impl Directive {
    /// Every known directive, `Unknown` excluded.
    pub const ALL: [Directive; 17] = [
        Directive::ChildSrc,
        Directive::ConnectSrc,
        Directive::DefaultSrc,
        Directive::FontSrc,
        Directive::FrameSrc,
        Directive::ImgSrc,
        Directive::ManifestSrc,
        Directive::MediaSrc,
        Directive::ObjectSrc,
        Directive::PrefetchSrc,
        Directive::ScriptSrc,
        Directive::ScriptSrcElem,
        Directive::ScriptSrcAttr,
        Directive::StyleSrc,
        Directive::StyleSrcElem,
        Directive::WorkerSrc,
        Directive::BaseUri,
    ];

    /// Exact-name lookup. Case-sensitive, no trimming.
    pub fn from_name(name: &str) -> Option<Directive> {
        let d = match name {
            "child-src" => Directive::ChildSrc,
            "connect-src" => Directive::ConnectSrc,
            "default-src" => Directive::DefaultSrc,
            "font-src" => Directive::FontSrc,
            "frame-src" => Directive::FrameSrc,
            "img-src" => Directive::ImgSrc,
            "manifest-src" => Directive::ManifestSrc,
            "media-src" => Directive::MediaSrc,
            "object-src" => Directive::ObjectSrc,
            "prefetch-src" => Directive::PrefetchSrc,
            "script-src" => Directive::ScriptSrc,
            "script-src-elem" => Directive::ScriptSrcElem,
            "script-src-attr" => Directive::ScriptSrcAttr,
            "style-src" => Directive::StyleSrc,
            "style-src-elem" => Directive::StyleSrcElem,
            "worker-src" => Directive::WorkerSrc,
            "base-uri" => Directive::BaseUri,
            _ => return None,
        };
        Some(d)
    }

    /// Classify a raw `violated-directive` value.
    ///
    /// The first whitespace-separated token is looked up; everything after it
    /// is policy detail and ignored.
    pub fn classify(violated_directive: &str) -> Directive {
        violated_directive
            .split_whitespace()
            .next()
            .and_then(Directive::from_name)
            .unwrap_or(Directive::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Directive::ChildSrc => "child-src",
            Directive::ConnectSrc => "connect-src",
            Directive::DefaultSrc => "default-src",
            Directive::FontSrc => "font-src",
            Directive::FrameSrc => "frame-src",
            Directive::ImgSrc => "img-src",
            Directive::ManifestSrc => "manifest-src",
            Directive::MediaSrc => "media-src",
            Directive::ObjectSrc => "object-src",
            Directive::PrefetchSrc => "prefetch-src",
            Directive::ScriptSrc => "script-src",
            Directive::ScriptSrcElem => "script-src-elem",
            Directive::ScriptSrcAttr => "script-src-attr",
            Directive::StyleSrc => "style-src",
            Directive::StyleSrcElem => "style-src-elem",
            Directive::WorkerSrc => "worker-src",
            Directive::BaseUri => "base-uri",
            Directive::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a raw `violated-directive` string into a metric label.
///
/// Always returns a known directive name or [`UNKNOWN`].
pub fn classify(violated_directive: &str) -> &'static str {
    Directive::classify(violated_directive).as_str()
}

/// Whether the violation was blocked or only reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    Enforce,
    Report,
    Unknown,
}

impl Disposition {
    pub fn classify(raw: &str) -> Disposition {
        match raw {
            "enforce" => Disposition::Enforce,
            "report" => Disposition::Report,
            _ => Disposition::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Disposition::Enforce => "enforce",
            Disposition::Report => "report",
            Disposition::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
