// 文档级指针监听：拖动/缩放期间指针离开控件后仍需收到 move/up，所以监听挂在文档上
// 监听只能通过 begin_session 挂载，只在 DragSession 被 drop 时解绑

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

// 页面上已挂载控件的下标
pub type WidgetId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Move,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Resize,
    Drag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    pub id: ListenerId,
    pub owner: WidgetId,
    pub kind: SessionKind,
    pub phase: PointerPhase,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Registry {
    fn attach(&mut self, owner: WidgetId, kind: SessionKind, phase: PointerPhase) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            owner,
            kind,
            phase,
        });
        id
    }

    fn detach(&mut self, ids: &[ListenerId]) {
        self.listeners.retain(|l| !ids.contains(&l.id));
    }
}

#[derive(Clone, Debug, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_session(&self, owner: WidgetId, kind: SessionKind) -> DragSession {
        let mut reg = self.registry.borrow_mut();
        let on_move = reg.attach(owner, kind, PointerPhase::Move);
        let on_up = reg.attach(owner, kind, PointerPhase::Up);
        debug!("widget {owner}: {kind:?} session attached ({on_move:?}, {on_up:?})");
        DragSession {
            registry: Rc::downgrade(&self.registry),
            owner,
            kind,
            listeners: [on_move, on_up],
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    // 返回快照：分发过程中处理器可能结束会话（修改注册表）
    pub fn listeners(&self, phase: PointerPhase) -> Vec<Listener> {
        self.registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.phase == phase)
            .copied()
            .collect()
    }
}

// DragSession: 进行中的拖动/缩放，drop 即解绑监听
#[derive(Debug)]
pub struct DragSession {
    registry: Weak<RefCell<Registry>>,
    owner: WidgetId,
    kind: SessionKind,
    listeners: [ListenerId; 2],
}

impl DragSession {
    pub fn owner(&self) -> WidgetId {
        self.owner
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        // 文档已销毁时无需解绑
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().detach(&self.listeners);
            trace!(
                "widget {}: {:?} session detached",
                self.owner,
                self.kind
            );
        }
    }
}
