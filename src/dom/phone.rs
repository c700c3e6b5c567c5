//! Phone mask wiring for the contact form.

use web_sys::{ClipboardEvent, Document, Event, HtmlInputElement};

use super::{element_by_id, listen};
use crate::config::PageConfig;
use crate::error::Result;
use crate::phone::{MAX_FORMATTED_LEN, format_phone};

const FEATURE: &str = "phone mask";

pub(super) fn attach(document: &Document, config: &PageConfig) -> Result<()> {
    let input: HtmlInputElement = element_by_id(document, FEATURE, &config.phone_id)?;
    input.set_attribute("maxlength", &MAX_FORMATTED_LEN.to_string())?;

    let field = input.clone();
    listen(&input, "input", move |_: Event| {
        field.set_value(&format_phone(&field.value()));
        place_caret_at_end(&field);
    })?;

    let field = input.clone();
    listen(&input, "paste", move |ev: ClipboardEvent| {
        ev.prevent_default();
        let Some(data) = ev.clipboard_data() else {
            log::debug!("phone mask: paste without clipboard data");
            return;
        };
        match data.get_data("text") {
            Ok(pasted) => {
                field.set_value(&format_phone(&pasted));
                place_caret_at_end(&field);
            }
            Err(e) => log::debug!("phone mask: clipboard read failed: {e:?}"),
        }
    })?;

    Ok(())
}

/// Mid-string edits are not tracked; the caret always goes to the end.
fn place_caret_at_end(field: &HtmlInputElement) {
    let Ok(end) = u32::try_from(field.value().encode_utf16().count()) else {
        return;
    };
    if let Err(e) = field.set_selection_range(end, end) {
        log::trace!("phone mask: caret placement unsupported: {e:?}");
    }
}
