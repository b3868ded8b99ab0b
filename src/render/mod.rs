//! Rendering module for showcase.
//!
//! Turns tool records into HTML: the markdown-subset converter, carousel
//! cards, overlay details, use-case panels and the assembled page.

mod animation;
mod card;
mod markup;
mod page;
mod use_cases;

pub use animation::{animation_rng, card_angle, pick_icon_animation, CARD_ANGLES, ICON_ANIMATIONS};
pub use card::{neighbours, radio_id, render_card, render_detail, FALLBACK_EMOJI};
pub use markup::{inline_markup, to_markup};
pub use page::{detail_template_id, render_page, use_case_template_id, PageOptions, DEFAULT_TITLE};
pub use use_cases::{consolidate_use_cases, render_use_case_panel, ToolUseCases};
