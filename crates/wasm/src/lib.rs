use std::sync::{Mutex, MutexGuard};

use doping_plot_core::{Chart, ChartConfig, Page};
use doping_plot_protocol::Point;
use wasm_bindgen::prelude::*;

/// The one page this module drives. The browser calls in from a single
/// thread; the mutex only satisfies `static`.
static PAGE: Mutex<Option<Page>> = Mutex::new(None);

fn page() -> Result<MutexGuard<'static, Option<Page>>, JsError> {
    PAGE.lock().map_err(|_| JsError::new("page state poisoned"))
}

fn with_page<T>(f: impl FnOnce(&mut Page) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut guard = page()?;
    let page = guard
        .as_mut()
        .ok_or_else(|| JsError::new("no dataset loaded"))?;
    f(page)
}

/// Parse the dataset (JSON bytes) and lay out the chart, replacing any
/// previous one. Returns the number of records.
///
/// A dataset that fails to parse is logged and leaves an empty drawing
/// surface (zero records); it is not thrown to the caller.
#[wasm_bindgen]
pub fn load_dataset(data: &[u8]) -> Result<usize, JsError> {
    let loaded = page_for(data);
    let count = loaded.chart.records().len();
    *page()? = Some(loaded);
    Ok(count)
}

fn page_for(data: &[u8]) -> Page {
    match Chart::from_json(ChartConfig::default(), data) {
        Ok(chart) => Page::new(chart),
        Err(e) => {
            tracing::error!("failed to load dataset: {e}");
            Page::new(Chart::empty(ChartConfig::default()))
        }
    }
}

/// The chart as an SVG string.
#[wasm_bindgen]
pub fn render_svg(dark: bool) -> Result<String, JsError> {
    with_page(|page| Ok(page.chart.to_svg(dark)))
}

/// The chart's render commands as JSON.
#[wasm_bindgen]
pub fn render_commands() -> Result<String, JsError> {
    with_page(|page| page.to_json().map_err(|e| JsError::new(&e.to_string())))
}

/// Pointer moved to (`x`, `y`) in SVG coordinates, (`page_x`, `page_y`) on
/// the page. Returns the tooltip state as JSON.
#[wasm_bindgen]
pub fn pointer_move(x: f64, y: f64, page_x: f64, page_y: f64) -> Result<String, JsError> {
    with_page(|page| {
        page.chart
            .track_pointer(&mut page.tooltip, Point::new(x, y), Point::new(page_x, page_y));
        tooltip_json(page)
    })
}

/// Pointer left the chart. Returns the tooltip state as JSON.
#[wasm_bindgen]
pub fn pointer_leave() -> Result<String, JsError> {
    with_page(|page| {
        page.tooltip.hide();
        tooltip_json(page)
    })
}

/// Tooltip body as HTML (lines joined by `<br/>`).
#[wasm_bindgen]
pub fn tooltip_html() -> Result<String, JsError> {
    with_page(|page| Ok(page.tooltip.html()))
}

fn tooltip_json(page: &Page) -> Result<String, JsError> {
    serde_json::to_string(page.tooltip.state()).map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_dataset_gives_empty_page() {
        let page = page_for(br#"[{"Time":"3715","Place":1,"Name":"A","Year":1994,"Nationality":"ITA"}]"#);
        assert!(page.chart.records().is_empty());
        assert!(page.chart.is_empty());
        assert!(!page.tooltip.is_visible());
    }

    #[test]
    fn valid_dataset_is_laid_out() {
        let page = page_for(
            br#"[{"Time":"37:15","Place":3,"Name":"A","Year":1994,"Nationality":"ITA","Doping":""}]"#,
        );
        assert_eq!(page.chart.records().len(), 1);
        assert_eq!(page.chart.dots().len(), 1);
    }
}
