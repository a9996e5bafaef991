pub mod lookup;
pub mod projector;
pub mod status;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::Result;
use crate::models::{ExerciseListView, ProjectionOptions};
use crate::runtime::clock::Clock;
use crate::storage::SnapshotSource;

pub use lookup::{find_participation, participation_id_from_editor_path};
pub use projector::project;
pub use status::classify;

pub struct ExerciseService {
    source: Arc<dyn SnapshotSource>,
    clock: Arc<dyn Clock>,
}

impl ExerciseService {
    pub fn new(source: Arc<dyn SnapshotSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    /// 拉取课程快照并生成练习列表视图
    pub async fn load_dashboard(
        &self,
        course_id: i64,
        options: &ProjectionOptions,
    ) -> Result<ExerciseListView> {
        let snapshot = match self.source.fetch_course_snapshot(course_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to load exercises for course {}: {}", course_id, e);
                return Err(e);
            }
        };

        let now = self.clock.now();
        let view = project(snapshot.exercises, now, options);

        debug!(
            "Dashboard for course {} ({}) ready: {} visible, {} inactive",
            snapshot.course.id,
            snapshot.course.title,
            view.visible_exercises().count(),
            view.num_inactive
        );

        Ok(view)
    }
}
