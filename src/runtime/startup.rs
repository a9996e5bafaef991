use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::ProjectionOptions;
use crate::runtime::clock::SystemClock;
use crate::services::exercises::ExerciseService;

pub struct StartupContext {
    pub exercise_service: ExerciseService,
    pub course_id: i64,
    pub options: ProjectionOptions,
}

/// 根据配置生成投影参数
pub fn projection_options(config: &AppConfig) -> ProjectionOptions {
    ProjectionOptions {
        filter_by_id: config.dashboard.filter_by_exercise_id,
        show_inactive: config.dashboard.show_inactive,
        viewer_role: config.dashboard.viewer_role,
    }
}

/// 准备启动上下文
/// 包括快照数据源、时钟和投影参数
pub fn prepare_startup(config: &AppConfig) -> Result<StartupContext> {
    if cfg!(debug_assertions) {
        crate::storage::register::debug_snapshot_source_registry();
        debug!("Debug mode: Snapshot source registry is enabled");
    }

    let source = crate::storage::create_snapshot_source(&config.snapshot)?;
    warn!("Snapshot source initialized");

    let exercise_service = ExerciseService::new(source, Arc::new(SystemClock));

    Ok(StartupContext {
        exercise_service,
        course_id: config.dashboard.course_id,
        options: projection_options(config),
    })
}
