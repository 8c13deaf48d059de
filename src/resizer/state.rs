use log::{debug, trace};

use crate::container::Container;
use crate::document::{Document, DragSession, SessionKind, WidgetId};
use crate::geometry::{Point, Rect, Size};
use crate::resizer::handles::{hit_test_handle, layout_handles, Handle, HandleMetrics, HandleRegion};
use crate::resizer::options::ResizerOptions;
use crate::resizer::resize::resize_candidate;

// Interaction: 每个控件自己的交互状态机 Idle -> Resizing / Dragging -> Idle
// 会话对象随状态一起持有，状态离开时自动解绑文档监听
#[derive(Debug)]
pub enum Interaction {
    Idle,
    Resizing {
        origin: Point,
        captured: Size,
        aspect_ratio: Option<f64>,
        session: DragSession,
    },
    Dragging {
        origin: Point,
        session: DragSession,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        match self {
            Interaction::Resizing { aspect_ratio, .. } => *aspect_ratio,
            _ => None,
        }
    }
}

// Resizer: 可缩放、可选拖动的容器
pub struct Resizer {
    id: WidgetId,
    options: ResizerOptions,
    metrics: HandleMetrics,
    container: Container,
    interaction: Interaction,
}

impl Resizer {
    pub fn new(id: WidgetId, options: ResizerOptions, natural: Rect) -> Self {
        let container = Container::new(natural, &options.class_name);
        Self {
            id,
            options,
            metrics: HandleMetrics::default(),
            container,
            interaction: Interaction::Idle,
        }
    }

    pub fn with_metrics(mut self, metrics: HandleMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn options(&self) -> &ResizerOptions {
        &self.options
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn rect(&self) -> Rect {
        self.container.rect()
    }

    pub fn handles(&self) -> Vec<HandleRegion> {
        layout_handles(self.container.rect(), &self.options, &self.metrics)
    }

    pub fn hit_test(&self, p: Point) -> Option<HandleRegion> {
        hit_test_handle(p, &self.handles())
    }

    // 返回是否开始了交互
    pub fn pointer_down(&mut self, handle: Handle, at: Point, document: &Document) -> bool {
        match handle {
            Handle::Drag => self.on_drag_handle_pointer_down(at, document),
            Handle::Edge(_) | Handle::Corner => self.on_handle_pointer_down(handle, at, document),
        }
    }

    pub fn on_handle_pointer_down(&mut self, handle: Handle, at: Point, document: &Document) -> bool {
        if !handle.is_resize() {
            return false;
        }
        let captured = self.container.computed_size();
        let aspect_ratio = handle
            .keeps_aspect_ratio()
            .then(|| captured.width / captured.height);
        // 先释放可能遗留的旧会话（丢失 pointer-up 的情况）
        self.interaction = Interaction::Idle;
        let session = document.begin_session(self.id, SessionKind::Resize);
        debug!(
            "widget {}: resize from {:?} at ({}, {}), size {}x{}, ratio {:?}",
            self.id, handle, at.x, at.y, captured.width, captured.height, aspect_ratio
        );
        self.interaction = Interaction::Resizing {
            origin: at,
            captured,
            aspect_ratio,
            session,
        };
        true
    }

    pub fn on_document_pointer_move(&mut self, at: Point) {
        let Interaction::Resizing {
            origin,
            captured,
            aspect_ratio,
            ..
        } = &self.interaction
        else {
            return;
        };
        let (dx, dy) = at.delta_from(*origin);
        let update = resize_candidate(*captured, *aspect_ratio, dx, dy, &self.options.bounds);
        if update.is_empty() {
            trace!("widget {}: resize by ({dx}, {dy}) rejected by bounds", self.id);
            return;
        }
        if let Some(w) = update.width {
            self.container.set_width(w);
        }
        if let Some(h) = update.height {
            self.container.set_height(h);
        }
        trace!("widget {}: resized to {:?}", self.id, self.container.rect().size());
    }

    pub fn on_document_pointer_up(&mut self) {
        if self.interaction.is_resizing() {
            self.interaction = Interaction::Idle;
            debug!("widget {}: resize finished", self.id);
        }
    }

    // 未开启 draggable 时不做任何事
    pub fn on_drag_handle_pointer_down(&mut self, at: Point, document: &Document) -> bool {
        if !self.options.draggable {
            return false;
        }
        self.interaction = Interaction::Idle;
        let session = document.begin_session(self.id, SessionKind::Drag);
        debug!("widget {}: drag at ({}, {})", self.id, at.x, at.y);
        self.interaction = Interaction::Dragging {
            origin: at,
            session,
        };
        true
    }

    pub fn on_document_drag_move(&mut self, at: Point) {
        let Interaction::Dragging { origin, .. } = &mut self.interaction else {
            return;
        };
        let (dx, dy) = at.delta_from(*origin);
        // 每次从当前布局重新读取偏移，并把原点重置为当前指针位置
        let offset = self.container.offset();
        self.container.set_top(offset.y + dy);
        self.container.set_left(offset.x + dx);
        *origin = at;
    }

    pub fn on_document_drag_up(&mut self) {
        if self.interaction.is_dragging() {
            self.interaction = Interaction::Idle;
            debug!("widget {}: drag finished", self.id);
        }
    }

    pub fn on_document_move(&mut self, kind: SessionKind, at: Point) {
        match kind {
            SessionKind::Resize => self.on_document_pointer_move(at),
            SessionKind::Drag => self.on_document_drag_move(at),
        }
    }

    pub fn on_document_up(&mut self, kind: SessionKind) {
        match kind {
            SessionKind::Resize => self.on_document_pointer_up(),
            SessionKind::Drag => self.on_document_drag_up(),
        }
    }
}
