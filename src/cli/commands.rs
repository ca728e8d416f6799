use std::time::Instant;

use crate::RenderOutcome;
use crate::binder::binder::EndpointBinder;
use crate::binder::clipboard::MemoryClipboard;
use crate::binder::replay::{ReplayScript, replay};
use crate::binder::sink::CLIPBOARD_ATTRIBUTE;
use crate::cli::config::AppConfig;
use crate::dom::document::{load_document, write_file};
use crate::dom::dom_model::Document;
use crate::dom::templates::{index_page, tiled_page};
use crate::render_document;
use crate::service::client::{ImageServiceClient, preview_file_name};
use crate::trace::logger::TraceLogger;

// ============================================================================
// render subcommand
// ============================================================================

pub fn cmd_render(
    config: &AppConfig,
    page: &str,
    base: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(page)?;

    if verbose > 0 {
        eprintln!("Loaded {} ({} elements)", page, document.elements.len());
    }

    match render_document(&document, &config.binder, base)? {
        RenderOutcome::NotApplicable => {
            println!("Page has no endpoint form; nothing to render.");
        }
        RenderOutcome::Invalid => {
            println!("Form is currently invalid; no endpoint.");
        }
        RenderOutcome::Rendered { path_and_query, url } => {
            println!("{}", path_and_query);
            println!("{}", url);
        }
    }

    Ok(())
}

// ============================================================================
// replay subcommand
// ============================================================================

pub fn cmd_replay(
    config: &AppConfig,
    page: &str,
    events: &str,
    output: Option<&str>,
    tracer: TraceLogger,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut document = load_document(page)?;
    let script = ReplayScript::load(events)?;

    let Some(mut binder) = EndpointBinder::attach(&mut document, &config.binder, tracer)? else {
        println!("Page has no endpoint form; nothing to replay.");
        return Ok(());
    };

    if verbose > 0 {
        eprintln!(
            "Replaying {} steps against {} ({:?} page)",
            script.steps.len(),
            page,
            binder.bindings().kind
        );
    }

    let mut clipboard = MemoryClipboard::default();
    let report = replay(&mut binder, &mut document, &script, &mut clipboard, Instant::now())?;

    println!(
        "Applied {} updates ({} edits ignored, {} copies)",
        report.updates.len(),
        report.ignored_edits,
        report.copied.len()
    );
    for update in &report.updates {
        let marker = if update.image_refreshed { "image" } else { "     " };
        println!("  [{}] {:<12} {}", marker, update.trigger, update.path_and_query);
    }

    print_page_state(&document, &binder);

    if let Some(path) = output {
        write_file(path, document.to_json_string()?.as_bytes())?;
        if verbose > 0 {
            eprintln!("Wrote: {}", path);
        }
    }

    Ok(())
}

fn print_page_state(document: &Document, binder: &EndpointBinder) {
    let bindings = binder.bindings();
    let endpoint = document
        .get_element_by_id(&bindings.endpoint_id)
        .and_then(|el| el.text.clone())
        .unwrap_or_default();
    let image = document
        .get_element_by_id(&bindings.image_id)
        .and_then(|el| el.attribute("src").map(str::to_string))
        .unwrap_or_default();
    let clipboard = document
        .get_element_by_id(&bindings.copy_button_id)
        .and_then(|el| el.attribute(CLIPBOARD_ATTRIBUTE).map(str::to_string))
        .unwrap_or_default();

    println!("endpoint:  {}", endpoint);
    println!("image:     {}", image);
    println!("clipboard: {}", clipboard);
}

// ============================================================================
// scaffold subcommand
// ============================================================================

pub fn cmd_scaffold(
    config: &AppConfig,
    kind: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = match kind {
        "tiled" => tiled_page(&config.defaults),
        "index" => index_page(&config.defaults),
        other => return Err(format!("Unknown page kind '{}' (expected index or tiled)", other).into()),
    };

    let json = document.to_json_string()?;
    match output {
        Some(path) => write_file(path, json.as_bytes())?,
        None => println!("{}", json),
    }

    Ok(())
}

// ============================================================================
// fetch subcommand
// ============================================================================

pub fn cmd_fetch(
    config: &AppConfig,
    page: &str,
    base: Option<&str>,
    output: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = load_document(page)?;
    let base = base.or(config.service.base_url.as_deref());

    let url = match render_document(&document, &config.binder, base)? {
        RenderOutcome::Rendered { url, .. } => url,
        RenderOutcome::NotApplicable => {
            return Err("Page has no endpoint form; nothing to fetch.".into());
        }
        RenderOutcome::Invalid => {
            return Err("Form is currently invalid; no endpoint to fetch.".into());
        }
    };

    if verbose > 0 {
        eprintln!("Fetching {}", url);
    }

    let image = ImageServiceClient::new().fetch(&url)?;
    let path = output
        .map(str::to_string)
        .unwrap_or_else(|| preview_file_name(&url));
    write_file(&path, &image.bytes)?;

    println!(
        "Saved {} bytes ({}) to {}",
        image.bytes.len(),
        image.content_type.as_deref().unwrap_or("unknown type"),
        path
    );
    if let Some(text) = &image.random_text {
        println!("Random text: {}", text);
    }

    Ok(())
}
