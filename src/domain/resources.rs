// Resource argument resolution

use super::value_objects::Resource;

/// Error raised while resolving call arguments into a [`ResourceSet`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Fewer than four resources were supplied across both mechanisms.
    #[error("Expected 4 arguments, received {supplied}.")]
    Incomplete { supplied: usize },

    /// A supplied quantity was negative. A negative availability would make
    /// its consumption constraint unsatisfiable, so it is rejected up front.
    #[error("resource '{resource}' must be non-negative, got {quantity}")]
    NegativeQuantity { resource: Resource, quantity: f64 },
}

/// Raw arguments for one optimization run: an ordered list of positional
/// quantities plus optional named overrides.
///
/// Assignment happens in two phases when [`resolve`](Self::resolve) is
/// called: positional values are applied first, in [`Resource::ORDER`], then
/// named values are merged on top. A named quantity therefore wins over a
/// positional one for the same resource, regardless of the order the builder
/// methods were chained in. A slot is unset only if neither mechanism
/// supplied it; an explicit zero counts as supplied.
#[derive(Debug, Clone, Default)]
pub struct ResourceArgs {
    positional: Vec<f64>,
    water: Option<f64>,
    sugar: Option<f64>,
    lemon_juice: Option<f64>,
    fruit_puree: Option<f64>,
}

impl ResourceArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional quantities, interpreted in [`Resource::ORDER`]. Values
    /// past the fourth are ignored.
    pub fn positional(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            positional: values.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_water(self, quantity: f64) -> Self {
        self.with_named(Resource::Water, quantity)
    }

    pub fn with_sugar(self, quantity: f64) -> Self {
        self.with_named(Resource::Sugar, quantity)
    }

    pub fn with_lemon_juice(self, quantity: f64) -> Self {
        self.with_named(Resource::LemonJuice, quantity)
    }

    pub fn with_fruit_puree(self, quantity: f64) -> Self {
        self.with_named(Resource::FruitPuree, quantity)
    }

    /// Named quantity for `resource`.
    pub fn with_named(mut self, resource: Resource, quantity: f64) -> Self {
        let slot = match resource {
            Resource::Water => &mut self.water,
            Resource::Sugar => &mut self.sugar,
            Resource::LemonJuice => &mut self.lemon_juice,
            Resource::FruitPuree => &mut self.fruit_puree,
        };
        *slot = Some(quantity);
        self
    }

    fn named(&self, resource: Resource) -> Option<f64> {
        match resource {
            Resource::Water => self.water,
            Resource::Sugar => self.sugar,
            Resource::LemonJuice => self.lemon_juice,
            Resource::FruitPuree => self.fruit_puree,
        }
    }

    /// Merges both argument mechanisms and verifies all four resources are
    /// present. Fails before any model is built.
    pub fn resolve(self) -> Result<ResourceSet, ResolveError> {
        let mut slots: [Option<f64>; 4] = [None; 4];

        // Phase one: positional assignment, first four values only.
        for (slot, &quantity) in slots.iter_mut().zip(self.positional.iter()) {
            *slot = Some(quantity);
        }

        // Phase two: named overrides.
        for (slot, &resource) in slots.iter_mut().zip(Resource::ORDER.iter()) {
            if let Some(quantity) = self.named(resource) {
                *slot = Some(quantity);
            }
        }

        let supplied = slots.iter().filter(|slot| slot.is_some()).count();
        if supplied < slots.len() {
            return Err(ResolveError::Incomplete { supplied });
        }

        let [water, sugar, lemon_juice, fruit_puree] =
            slots.map(|slot| slot.unwrap_or_default());
        let set = ResourceSet {
            water,
            sugar,
            lemon_juice,
            fruit_puree,
        };

        for resource in Resource::ORDER {
            let quantity = set.get(resource);
            if quantity < 0.0 {
                return Err(ResolveError::NegativeQuantity { resource, quantity });
            }
        }

        Ok(set)
    }
}

/// A fully-resolved set of the four resource quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSet {
    pub water: f64,
    pub sugar: f64,
    pub lemon_juice: f64,
    pub fruit_puree: f64,
}

impl ResourceSet {
    pub fn get(&self, resource: Resource) -> f64 {
        match resource {
            Resource::Water => self.water,
            Resource::Sugar => self.sugar,
            Resource::LemonJuice => self.lemon_juice,
            Resource::FruitPuree => self.fruit_puree,
        }
    }
}
