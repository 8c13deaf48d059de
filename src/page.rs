// 页面外壳：持有文档与已挂载的容器，负责把指针事件分发给它们

use log::debug;
use tiny_skia::Pixmap;

use crate::document::{Document, PointerPhase, WidgetId};
use crate::geometry::{Point, Rect};
use crate::resizer::{HandleMetrics, HandleRegion, Resizer, ResizerOptions};

/// Opaque child content painted inside a container.
pub trait Content {
    fn paint(&self, pixmap: &mut Pixmap, area: Rect);
}

struct Mounted {
    widget: Resizer,
    content: Box<dyn Content>,
}

#[derive(Default)]
pub struct Page {
    document: Document,
    mounted: Vec<Mounted>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mount(
        &mut self,
        options: ResizerOptions,
        natural: Rect,
        content: Box<dyn Content>,
    ) -> WidgetId {
        self.mount_with_metrics(options, natural, HandleMetrics::default(), content)
    }

    // 手柄尺寸由样式表决定，默认值见 HandleMetrics::default
    pub fn mount_with_metrics(
        &mut self,
        options: ResizerOptions,
        natural: Rect,
        metrics: HandleMetrics,
        content: Box<dyn Content>,
    ) -> WidgetId {
        let id = self.mounted.len();
        debug!("mount widget {id} at {natural:?} with {options:?}");
        self.mounted.push(Mounted {
            widget: Resizer::new(id, options, natural).with_metrics(metrics),
            content,
        });
        id
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Resizer> {
        self.mounted.get(id).map(|m| &m.widget)
    }

    // 自底向上
    pub fn widgets(&self) -> impl Iterator<Item = (&Resizer, &dyn Content)> {
        self.mounted.iter().map(|m| (&m.widget, m.content.as_ref()))
    }

    fn topmost_at(&self, at: Point) -> Option<WidgetId> {
        self.mounted
            .iter()
            .rev()
            .find(|m| m.widget.rect().contains(at))
            .map(|m| m.widget.id())
    }

    pub fn cursor_at(&self, at: Point) -> Option<HandleRegion> {
        let id = self.topmost_at(at)?;
        self.mounted[id].widget.hit_test(at)
    }

    pub fn pointer_down(&mut self, at: Point) -> bool {
        let Some(id) = self.topmost_at(at) else {
            return false;
        };
        let widget = &mut self.mounted[id].widget;
        match widget.hit_test(at) {
            Some(region) if region.wired => widget.pointer_down(region.handle, at, &self.document),
            _ => false,
        }
    }

    pub fn pointer_move(&mut self, at: Point) {
        for listener in self.document.listeners(PointerPhase::Move) {
            if let Some(m) = self.mounted.get_mut(listener.owner) {
                m.widget.on_document_move(listener.kind, at);
            }
        }
    }

    pub fn pointer_up(&mut self) {
        for listener in self.document.listeners(PointerPhase::Up) {
            if let Some(m) = self.mounted.get_mut(listener.owner) {
                m.widget.on_document_up(listener.kind);
            }
        }
    }

    // 窗口级兜底：失焦等情况下文档收不到 pointer-up，结束所有会话
    pub fn cancel_interactions(&mut self) {
        let pending = self.document.listener_count();
        if pending > 0 {
            debug!("cancelling interactions, {pending} listeners attached");
        }
        self.pointer_up();
    }
}
