/// What a delegated document click should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    ToggleFaq,
    ScrollTo(String),
    Ignore,
}

/// `in_faq_question`: the click landed inside `.faq-question`.
/// `anchor_href`: `href` of the closest `a[href^="#"]`, if any.
pub fn classify_click(in_faq_question: bool, anchor_href: Option<&str>) -> ClickAction {
    if in_faq_question {
        return ClickAction::ToggleFaq;
    }
    match anchor_href {
        Some(href) if href.starts_with('#') && href != "#" => ClickAction::ScrollTo(href.to_string()),
        _ => ClickAction::Ignore,
    }
}

pub const OPEN_CLASS: &str = "open";

/// Class membership of an element.
pub trait ClassToggle {
    /// Flip `class`; returns whether it is now present.
    fn toggle_class(&mut self, class: &str) -> bool;
}

/// Open a closed FAQ item or close an open one.
pub fn toggle_open<C: ClassToggle + ?Sized>(item: &mut C) -> bool {
    item.toggle_class(OPEN_CLASS)
}
