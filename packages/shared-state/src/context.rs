//! Tree-scoped value containers with their own identity.
//!
//! Dioxus keys contexts by type, so two independent containers that both hold a `bool` would shadow
//! each other. A [`ScopedContext`] is keyed by a [`ContextId`] instead. Every scope that publishes a
//! value owns one context frame, which is provided as a regular Dioxus context and linked to the
//! frame of the nearest publishing ancestor.

use dioxus_core::{
    current_scope_id, has_context, needs_update_any, provide_context, try_consume_context, use_hook, ScopeId,
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{
    any::Any,
    cell::RefCell,
    fmt::Debug,
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_CONTEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// The identity of a [`ScopedContext`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextId(usize);

impl ContextId {
    fn next() -> Self {
        Self(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ContextId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A container for a value that is published to a subtree of components.
///
/// Reading the container returns the value published by the nearest enclosing scope, or the
/// container's default if no enclosing scope published one.
pub struct ScopedContext<V> {
    id: ContextId,
    default: fn() -> V,
}

impl<V> Clone for ScopedContext<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for ScopedContext<V> {}

impl<V> Debug for ScopedContext<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedContext")
            .field("id", &self.id)
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

impl<V> ScopedContext<V> {
    /// The identity of this container.
    pub fn id(&self) -> ContextId {
        self.id
    }
}

impl<V: Clone + 'static> ScopedContext<V> {
    /// Create a new container. `default` is what readers see when no enclosing scope has published
    /// a value.
    pub fn new(default: fn() -> V) -> Self {
        Self {
            id: ContextId::next(),
            default,
        }
    }

    /// Publish a value to the current component and all of its descendants.
    ///
    /// This is a hook: it must be called on every render of the publishing component, in the same
    /// order relative to the component's other hooks. Publishing again replaces the previous value
    /// and schedules every component that [`read`](Self::read) it for a re-render.
    ///
    /// Values are not compared: every publication wakes every reader, even if the new value equals
    /// the old one. A provider that re-renders therefore re-renders all of its readers as well.
    pub fn provide(&self, value: V) {
        let frame = ContextFrame::current();
        let subscribers = frame.publish(self.id, Rc::new(value));

        for scope in subscribers {
            needs_update_any(scope);
        }
    }

    /// Read the nearest published value and subscribe the current component to future
    /// publications of it.
    pub fn read(&self) -> V {
        self.lookup(Some(current_scope_id()))
    }

    /// Read the nearest published value without subscribing to it.
    pub fn peek(&self) -> V {
        self.lookup(None)
    }

    fn lookup(&self, subscriber: Option<ScopeId>) -> V {
        try_consume_context::<ContextFrame>()
            .and_then(|frame| frame.lookup(self.id, subscriber))
            .and_then(|value| value.downcast_ref::<V>().cloned())
            .unwrap_or_else(self.default)
    }
}

/// The values published by a single scope.
#[derive(Clone)]
struct ContextFrame {
    inner: Rc<FrameInner>,
}

struct FrameInner {
    scope: ScopeId,
    slots: RefCell<FxHashMap<ContextId, Slot>>,
    parent: Option<ContextFrame>,
}

struct Slot {
    value: Rc<dyn Any>,
    subscribers: FxHashSet<ScopeId>,
}

impl ContextFrame {
    /// Get the frame owned by the current scope, creating and providing it on the first render.
    fn current() -> Self {
        use_hook(|| {
            if let Some(frame) = has_context::<ContextFrame>() {
                return frame;
            }

            // The current scope has not provided a frame yet, so this resolves to the nearest
            // ancestor's frame.
            let parent = try_consume_context::<ContextFrame>();
            let scope = current_scope_id();
            tracing::trace!("creating context frame in {scope:?}");

            provide_context(ContextFrame {
                inner: Rc::new(FrameInner {
                    scope,
                    slots: RefCell::new(FxHashMap::default()),
                    parent,
                }),
            })
        })
    }

    /// Store a value, returning the scopes that read the value it replaced.
    fn publish(&self, id: ContextId, value: Rc<dyn Any>) -> FxHashSet<ScopeId> {
        tracing::trace!("publishing {id:?} in {:?}", self.inner.scope);

        let mut slots = self.inner.slots.borrow_mut();
        match slots.get_mut(&id) {
            Some(slot) => {
                slot.value = value;
                std::mem::take(&mut slot.subscribers)
            }
            None => {
                slots.insert(
                    id,
                    Slot {
                        value,
                        subscribers: FxHashSet::default(),
                    },
                );
                FxHashSet::default()
            }
        }
    }

    /// Walk this frame and its ancestors until one has published `id`.
    fn lookup(&self, id: ContextId, subscriber: Option<ScopeId>) -> Option<Rc<dyn Any>> {
        let mut frame = Some(self);

        while let Some(current) = frame {
            if let Some(slot) = current.inner.slots.borrow_mut().get_mut(&id) {
                if let Some(scope) = subscriber {
                    slot.subscribers.insert(scope);
                }
                tracing::trace!("found {id:?} in {:?}", current.inner.scope);
                return Some(slot.value.clone());
            }

            frame = current.inner.parent.as_ref();
        }

        None
    }
}
