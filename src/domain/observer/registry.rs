use std::cell::RefCell;
use std::rc::Rc;

/// A zero-argument subscriber. Identity is the allocation: two clones of the
/// same `Rc` are the same observer, two separate closures never are.
pub type Observer = Rc<dyn Fn()>;

/// Wraps a closure into an [`Observer`].
pub fn observer(callback: impl Fn() + 'static) -> Observer {
    Rc::new(callback)
}

/// Ordered list of observers notified together.
///
/// Lives on the UI event loop, so the list is a plain `RefCell`. Duplicate
/// registrations are kept and fire once each.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: RefCell<Vec<Observer>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Observer) {
        self.observers.borrow_mut().push(observer);
    }

    /// Removes every registration of `observer`. Unknown observers are ignored.
    pub fn unsubscribe(&self, observer: &Observer) {
        self.observers
            .borrow_mut()
            .retain(|registered| !Rc::ptr_eq(registered, observer));
    }

    /// Calls every observer in registration order.
    ///
    /// The list is copied first; observers may (un)subscribe while being
    /// notified and the change applies from the next notification. A panicking
    /// observer stops the remaining ones.
    pub fn notify_all(&self) {
        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer();
        }
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}

/// The change notifications of the portal, owned by the application root.
#[derive(Default, Clone)]
pub struct Listeners {
    pub theme: Rc<ObserverRegistry>,
    pub avatar: Rc<ObserverRegistry>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Observer) {
        let count = Rc::new(Cell::new(0));
        let captured = count.clone();
        (count, observer(move || captured.set(captured.get() + 1)))
    }

    #[test]
    fn test_subscribe_then_notify_calls_once() {
        let registry = ObserverRegistry::new();
        let (count, cb) = counter();

        registry.subscribe(cb);
        registry.notify_all();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_notify_in_registration_order() {
        let registry = ObserverRegistry::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for id in 0..3 {
            let order = order.clone();
            registry.subscribe(observer(move || order.borrow_mut().push(id)));
        }
        registry.notify_all();
        registry.notify_all();

        assert_eq!(*order.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_duplicates_fire_twice() {
        let registry = ObserverRegistry::new();
        let (count, cb) = counter();

        registry.subscribe(cb.clone());
        registry.subscribe(cb);
        registry.notify_all();

        assert_eq!(registry.len(), 2);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_unsubscribe_removes_every_registration() {
        let registry = ObserverRegistry::new();
        let (count, cb) = counter();
        let (other_count, other) = counter();

        registry.subscribe(cb.clone());
        registry.subscribe(other);
        registry.subscribe(cb.clone());
        registry.unsubscribe(&cb);
        registry.notify_all();

        assert_eq!(registry.len(), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(other_count.get(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_is_noop() {
        let registry = ObserverRegistry::new();
        let (_, cb) = counter();
        let (_, stranger) = counter();

        registry.subscribe(cb);
        registry.unsubscribe(&stranger);

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_identical_closures_are_distinct_observers() {
        let registry = ObserverRegistry::new();
        let first = observer(|| {});
        let second = observer(|| {});

        registry.subscribe(first.clone());
        registry.unsubscribe(&second);

        assert_eq!(registry.len(), 1);
        registry.unsubscribe(&first);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_observer_can_unsubscribe_itself_while_notified() {
        let registry = Rc::new(ObserverRegistry::new());
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Observer>>> = Rc::new(RefCell::new(None));

        let cb = {
            let registry = registry.clone();
            let count = count.clone();
            let slot = slot.clone();
            observer(move || {
                count.set(count.get() + 1);
                if let Some(me) = slot.borrow().as_ref() {
                    registry.unsubscribe(me);
                }
            })
        };
        *slot.borrow_mut() = Some(cb.clone());

        registry.subscribe(cb);
        registry.notify_all();
        registry.notify_all();

        assert_eq!(count.get(), 1);
        assert!(registry.is_empty());
        slot.borrow_mut().take();
    }

    #[test]
    fn test_listeners_are_independent() {
        let listeners = Listeners::new();
        let (theme_count, cb) = counter();

        listeners.theme.subscribe(cb);
        listeners.avatar.notify_all();

        assert_eq!(theme_count.get(), 0);
        assert!(listeners.avatar.is_empty());
    }
}
