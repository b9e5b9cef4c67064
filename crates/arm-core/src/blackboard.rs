use std::any::{type_name, Any, TypeId};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use thiserror::Error;

/// Errors from blackboard access.
///
/// A missing or mistyped entry is always a typed error here, never a panic:
/// nodes read entries that other nodes are expected to have written, and
/// nothing enforces that ordering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard entry `{key}` is missing")]
    Missing { key: String },

    #[error("blackboard entry `{key}` holds `{found}`, expected `{expected}`")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("blackboard entry `{key}` already declared as `{declared}`, cannot redeclare as `{requested}`")]
    Redeclared {
        key: String,
        declared: &'static str,
        requested: &'static str,
    },
}

/// Typed handle to a declared blackboard entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key<T: 'static> {
    name: Cow<'static, str>,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: 'static> Key<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _phantom: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

struct Slot {
    declared: TypeId,
    type_name: &'static str,
    value: Option<Box<dyn Any>>,
}

/// Shared key-value store for inter-node communication within a behavior tree.
///
/// Entries are indexed by (name, declared type): the first `declare` or write
/// for a name fixes its type, and every later access is checked against that
/// declaration. Lifetime is the lifetime of the tree; there is no teardown.
#[derive(Default)]
pub struct Blackboard {
    slots: BTreeMap<String, Slot>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Declare an entry of type `T`. Declaring the same name with the same
    /// type again is a no-op; with a different type it is an error.
    pub fn declare<T: 'static>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
    ) -> Result<Key<T>, BlackboardError> {
        let name = name.into();
        match self.slots.get(name.as_ref()) {
            Some(slot) if slot.declared != TypeId::of::<T>() => {
                return Err(BlackboardError::Redeclared {
                    key: name.into_owned(),
                    declared: slot.type_name,
                    requested: type_name::<T>(),
                });
            }
            Some(_) => {}
            None => {
                self.slots.insert(
                    name.clone().into_owned(),
                    Slot {
                        declared: TypeId::of::<T>(),
                        type_name: type_name::<T>(),
                        value: None,
                    },
                );
            }
        }
        Ok(Key {
            name,
            _phantom: PhantomData,
        })
    }

    /// Whether `name` currently holds a value (a bare declaration does not).
    pub fn contains(&self, name: &str) -> bool {
        self.slots
            .get(name)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn set<T: 'static>(&mut self, key: &Key<T>, value: T) -> Result<(), BlackboardError> {
        self.set_by_name(key.name.clone(), value)
    }

    pub fn get<T: 'static>(&self, key: &Key<T>) -> Result<&T, BlackboardError> {
        self.get_by_name(key.name())
    }

    pub fn get_mut<T: 'static>(&mut self, key: &Key<T>) -> Result<&mut T, BlackboardError> {
        let name = key.name();
        let slot = self
            .slots
            .get_mut(name)
            .ok_or_else(|| BlackboardError::Missing {
                key: name.to_string(),
            })?;
        if slot.declared != TypeId::of::<T>() {
            return Err(BlackboardError::TypeMismatch {
                key: name.to_string(),
                expected: type_name::<T>(),
                found: slot.type_name,
            });
        }
        slot.value
            .as_mut()
            .and_then(|v| v.downcast_mut::<T>())
            .ok_or_else(|| BlackboardError::Missing {
                key: name.to_string(),
            })
    }

    /// Write a value under a name whose key is only known at runtime.
    /// Declares the entry on first write; type-checks it thereafter.
    pub fn set_by_name<T: 'static>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: T,
    ) -> Result<(), BlackboardError> {
        let name = name.into();
        match self.slots.get_mut(name.as_ref()) {
            Some(slot) => {
                if slot.declared != TypeId::of::<T>() {
                    return Err(BlackboardError::TypeMismatch {
                        key: name.into_owned(),
                        expected: slot.type_name,
                        found: type_name::<T>(),
                    });
                }
                slot.value = Some(Box::new(value));
            }
            None => {
                self.slots.insert(
                    name.into_owned(),
                    Slot {
                        declared: TypeId::of::<T>(),
                        type_name: type_name::<T>(),
                        value: Some(Box::new(value)),
                    },
                );
            }
        }
        Ok(())
    }

    /// Read a value under a name whose key is only known at runtime.
    pub fn get_by_name<T: 'static>(&self, name: &str) -> Result<&T, BlackboardError> {
        let slot = self.slots.get(name).ok_or_else(|| BlackboardError::Missing {
            key: name.to_string(),
        })?;
        if slot.declared != TypeId::of::<T>() {
            return Err(BlackboardError::TypeMismatch {
                key: name.to_string(),
                expected: type_name::<T>(),
                found: slot.type_name,
            });
        }
        slot.value
            .as_ref()
            .and_then(|v| v.downcast_ref::<T>())
            .ok_or_else(|| BlackboardError::Missing {
                key: name.to_string(),
            })
    }

    /// Remove the value from an entry, leaving the declaration in place.
    pub fn remove<T: 'static>(&mut self, key: &Key<T>) -> Result<Option<T>, BlackboardError> {
        let Some(slot) = self.slots.get_mut(key.name()) else {
            return Ok(None);
        };
        if slot.declared != TypeId::of::<T>() {
            return Err(BlackboardError::TypeMismatch {
                key: key.name().to_string(),
                expected: type_name::<T>(),
                found: slot.type_name,
            });
        }
        Ok(slot
            .value
            .take()
            .and_then(|v| v.downcast::<T>().ok())
            .map(|b| *b))
    }
}
