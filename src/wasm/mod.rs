//! WASM bindings for the paginator and host pipeline

use crate::config::Settings;
use crate::host::{AutoPager, Item, Outcome};
use crate::pagination::{Pagination, Paginator};
use crate::policy::PagingPolicy;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Paginate `content` with a JSON policy
#[wasm_bindgen]
pub fn paginate(content: &str, policy_json: &str) -> Result<String, JsValue> {
    let policy = PagingPolicy::from_json(policy_json).map_err(to_js_error)?;
    Ok(crate::paginate(content, &policy))
}

/// Paginate `content` and return a JSON report
#[wasm_bindgen(js_name = paginateWithReport)]
pub fn paginate_with_report(content: &str, policy_json: &str) -> Result<String, JsValue> {
    let policy = PagingPolicy::from_json(policy_json).map_err(to_js_error)?;
    let report = Paginator::new().paginate_with_report(content, &policy);
    serde_json::to_string(&PaginationReport::from(report)).map_err(to_js_error)
}

/// Split marked content into an array of page strings
#[wasm_bindgen(js_name = splitPages)]
pub fn split_pages(content: &str) -> js_sys::Array {
    crate::split_pages(content)
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// WASM-exposed host pipeline
#[wasm_bindgen]
pub struct WasmAutoPager {
    pager: AutoPager,
}

#[wasm_bindgen]
impl WasmAutoPager {
    /// Create a pager with default settings
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            pager: AutoPager::new(Settings::default()),
        }
    }

    /// Create a pager from a settings JSON document
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(settings_json: &str) -> Result<WasmAutoPager, JsValue> {
        let settings = Settings::from_json(settings_json).map_err(to_js_error)?;
        Ok(Self {
            pager: AutoPager::new(settings),
        })
    }

    /// Paginate an item's content, returning it unchanged when skipped
    pub fn process(&self, kind: &str, content: &str, disabled: bool) -> String {
        let mut item = Item {
            id: 0,
            kind: kind.to_string(),
            content: content.to_string(),
            autopaging_disabled: disabled,
        };
        self.pager.process(&mut item);
        item.content
    }

    /// Page count an item would end up with
    #[wasm_bindgen(js_name = pageCount)]
    pub fn page_count(&self, kind: &str, content: &str) -> usize {
        let mut item = Item::new(0, kind, content);
        match self.pager.process(&mut item) {
            Outcome::Paginated { pages } => pages,
            Outcome::Skipped(_) => self.pager.paginator().split_pages(content).len(),
        }
    }

    /// Current settings as JSON
    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> Result<String, JsValue> {
        self.pager.settings().to_json().map_err(to_js_error)
    }
}

impl Default for WasmAutoPager {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable pagination report for JS
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationReport {
    pub content: String,
    pub block_count: usize,
    pub page_count: usize,
    /// 0-based indices of blocks that end a page
    pub breaks: Vec<usize>,
}

impl From<Pagination> for PaginationReport {
    fn from(report: Pagination) -> Self {
        Self {
            page_count: report.page_count(),
            block_count: report.block_count,
            breaks: report.breaks.to_vec(),
            content: report.content,
        }
    }
}
