use crate::helpers::tracing_sink::TracingSink;
use rust_tagged_log::prelude::{BuildMode, Category, ColorCode, TaggedLoggerBuilder};
use std::sync::Arc;
use test_scenarios_rust::scenario::{Scenario, ScenarioGroup, ScenarioGroupImpl};
use tracing::info;

/// Trace color of every category, then emit one colored line per category.
struct CategoryColors;

impl Scenario for CategoryColors {
    fn name(&self) -> &str {
        "category_colors"
    }

    fn run(&self, _input: &str) -> Result<(), String> {
        for category in Category::ALL {
            let color = ColorCode::from(category.color()).hex();
            info!(category = category.name(), color = %color);

            let logger = TaggedLoggerBuilder::new(category.name())
                .category(category)
                .sink(Arc::new(TracingSink))
                .build_mode(BuildMode::Development)
                .build()
                .map_err(|e| format!("{e:?}"))?;
            logger.log_info("color_check");
        }

        Ok(())
    }
}

pub fn categories_group() -> Box<dyn ScenarioGroup> {
    Box::new(ScenarioGroupImpl::new(
        "categories",
        vec![Box::new(CategoryColors)],
        vec![],
    ))
}
