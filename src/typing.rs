use crate::constants::TYPING_TEXT_ID;
use crate::dom;
use crate::timer::RepeatingTask;
use folio_core::PhraseCycle;
use std::time::Duration;
use web_sys as web;

/// Start the typewriter on `#typing-text`. The first character appears
/// immediately.
pub fn wire_typing(document: &web::Document, phrases: Vec<String>) -> anyhow::Result<RepeatingTask> {
    let target: web::Element = dom::element_by_id(document, TYPING_TEXT_ID)?;
    let mut cycle = PhraseCycle::new(phrases)?;
    log::info!("[typing] starting with {:?}", cycle.current_phrase());
    Ok(RepeatingTask::start(Duration::ZERO, move || {
        let frame = cycle.tick();
        target.set_text_content(Some(&frame.text));
        frame.delay
    }))
}
