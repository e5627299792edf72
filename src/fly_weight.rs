use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

/// An interface through which flyweights receive and act on extrinsic state.
pub trait Flyweight<T> {
    fn operation(&self, extrinsic_state: T);
}

/// The sole [Flyweight] implementation.
///
/// The stored field starts out unset and is overwritten by every
/// [Flyweight::operation] call (last writer wins). Note that this keeps the
/// extrinsic argument in the field labeled intrinsic state; the textbook
/// pattern would never retain extrinsic state in a shared instance, but the
/// behavior is kept as-is for compatibility.
pub struct ConcreteFlyweight<T> {
    intrinsic_state: RefCell<Option<T>>,
}

impl<T> ConcreteFlyweight<T> {
    fn new() -> ConcreteFlyweight<T> {
        ConcreteFlyweight {
            intrinsic_state: RefCell::new(None),
        }
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.intrinsic_state.borrow().is_some()
    }

    pub fn intrinsic_state(&self) -> Option<T> where T: Clone {
        self.intrinsic_state.borrow().clone()
    }
}

impl<T> Flyweight<T> for ConcreteFlyweight<T> {
    fn operation(&self, extrinsic_state: T) {
        *self.intrinsic_state.borrow_mut() = Some(extrinsic_state);
    }
}

/// Creates and manages flyweight instances, one per key.
///
/// A lookup for an unseen key lazily creates an unset instance; later lookups
/// with an equal key hand out the same instance (identity, not just value
/// equality). Entries live as long as the factory. Single-threaded by
/// construction: the handles are [Rc], so the factory is neither Send nor
/// Sync and the get-or-create step cannot race.
pub struct FlyweightFactory<K, T> {
    flyweights: HashMap<K, Rc<ConcreteFlyweight<T>>>,
}

impl<K, T> FlyweightFactory<K, T>
    where K: Eq + Hash
{
    pub fn new() -> FlyweightFactory<K, T> {
        FlyweightFactory {
            flyweights: HashMap::new(),
        }
    }

    /// Supplies the existing instance for `key`, or creates one if none
    /// exists. Never fails and never replaces an existing entry.
    pub fn get_flyweight(&mut self, key: K) -> Rc<ConcreteFlyweight<T>> {
        let flyweight = self.flyweights.entry(key).or_insert_with(|| {
            tracing::debug!("Flyweight cache miss. Creating a new instance.");
            Rc::new(ConcreteFlyweight::new())
        });
        Rc::clone(flyweight)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.flyweights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flyweights.is_empty()
    }
}

impl<K, T> Default for FlyweightFactory<K, T>
    where K: Eq + Hash
{
    fn default() -> Self {
        Self::new()
    }
}
