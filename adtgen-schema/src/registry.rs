use crate::{ClassSchema, Error, Result, validate};

/// Ordered, read-only catalog of class schemas.
///
/// Created once and passed to the generator; it is never mutated during a
/// run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    classes: Vec<ClassSchema>,
}

impl Registry {
    pub fn new(classes: Vec<ClassSchema>) -> Self {
        Self { classes }
    }

    /// Iterate over classes in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassSchema> {
        self.classes.iter()
    }

    /// Look up a class by name.
    pub fn get(&self, name: &str) -> Option<&ClassSchema> {
        self.classes.iter().find(|c| c.name() == name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Restrict the registry to `names`, keeping registry order.
    ///
    /// Fails on the first name that is not in the catalog.
    /// Fail on the first name that is not a class of this registry.
    pub fn check_selection<S: AsRef<str>>(&self, names: &[S]) -> Result<()> {
        match names.iter().find(|n| self.get(n.as_ref()).is_none()) {
            Some(missing) => Err(Box::new(Error::UnknownClass {
                name: missing.as_ref().to_string(),
            })),
            None => Ok(()),
        }
    }

    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Registry> {
        self.check_selection(names)?;

        let classes = self
            .classes
            .iter()
            .filter(|c| names.iter().any(|n| n.as_ref() == c.name()))
            .cloned()
            .collect();
        Ok(Registry::new(classes))
    }

    /// Collect every integrity error in the catalog.
    pub fn validate(&self) -> Vec<Error> {
        validate::check_classes(&self.classes)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ClassSchema;
    type IntoIter = std::slice::Iter<'a, ClassSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}
