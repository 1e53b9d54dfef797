/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A type-keyed property map attached to every in-flight request.
//!
//! Middleware reads and writes configuration through the bag: the endpoint
//! resolver, signing configuration, credentials provider, and similar
//! request-scoped values are all stored by type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// A type map of request properties.
#[derive(Default)]
pub struct PropertyBag {
    map: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Default::default()
    }

    /// Insert a value, returning the previously stored value of the same
    /// type if one existed.
    pub fn insert<T: Send + Sync + 'static>(&mut self, val: T) -> Option<T> {
        self.map
            .insert(TypeId::of::<T>(), Box::new(val))
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: Send + Sync + 'static>(&mut self) -> Option<&mut T> {
        self.map
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    pub fn remove<T: Send + Sync + 'static>(&mut self) -> Option<T> {
        self.map
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok().map(|boxed| *boxed))
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBag")
            .field("len", &self.map.len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::PropertyBag;

    #[test]
    fn insert_get_remove() {
        #[derive(Debug, PartialEq)]
        struct Marker(u32);

        let mut bag = PropertyBag::new();
        assert!(bag.get::<Marker>().is_none());
        assert_eq!(bag.insert(Marker(1)), None);
        assert_eq!(bag.insert(Marker(2)), Some(Marker(1)));
        assert_eq!(bag.get::<Marker>(), Some(&Marker(2)));
        bag.get_mut::<Marker>().unwrap().0 = 3;
        assert_eq!(bag.remove::<Marker>(), Some(Marker(3)));
        assert!(bag.get::<Marker>().is_none());
    }
}
