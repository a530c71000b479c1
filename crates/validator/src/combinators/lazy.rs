//! LAZY combinator - constraints built on first use

use crate::foundation::{BoxedConstraint, Constraint, ConstraintResult, Context};
use std::sync::OnceLock;

// ============================================================================
// LAZY COMBINATOR
// ============================================================================

/// A constraint produced by a factory the first time a value reaches it.
///
/// A recursive type's constraint cannot contain itself directly. It holds a
/// `Lazy` over the function that builds it instead, and each nesting level
/// is only built when the traversal gets there. The built constraint is
/// cached and shared by every later call, from any thread.
///
/// The factory type defaults to a plain function pointer, so
/// `Lazy<BoxedConstraint>` names the recursive case.
///
/// # Examples
///
/// ```rust,ignore
/// use trellis_validator::combinators::{Elements, Fields, Lazy};
/// use trellis_validator::prelude::*;
///
/// #[derive(Inspect)]
/// struct Category {
///     name: String,
///     children: Vec<Category>,
/// }
///
/// fn category() -> BoxedConstraint {
///     Fields::new()
///         .field("name", Required)
///         .field("children", Elements::new(Lazy::recursive(category)))
///         .boxed()
/// }
/// ```
pub struct Lazy<C, F = fn() -> C>
where
    F: Fn() -> C,
{
    factory: F,
    built: OnceLock<C>,
}

impl<C, F> Lazy<C, F>
where
    F: Fn() -> C,
{
    /// Wraps `factory`; nothing is built yet.
    pub const fn new(factory: F) -> Self {
        Self {
            factory,
            built: OnceLock::new(),
        }
    }

    /// Whether a value has reached this constraint yet.
    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// The cached constraint, building it if needed.
    pub fn constraint(&self) -> &C {
        self.built.get_or_init(|| {
            tracing::trace!("building lazy constraint");
            (self.factory)()
        })
    }
}

impl Lazy<BoxedConstraint> {
    /// Self-reference through a builder function.
    pub const fn recursive(build: fn() -> BoxedConstraint) -> Self {
        Self::new(build)
    }
}

impl<C, F> Constraint for Lazy<C, F>
where
    C: Constraint,
    F: Fn() -> C,
{
    fn violations(&self, ctx: &Context<'_>) -> ConstraintResult {
        self.constraint().violations(ctx)
    }

    fn name(&self) -> &str {
        self.built.get().map_or("Lazy", C::name)
    }
}

impl<C, F> std::fmt::Debug for Lazy<C, F>
where
    C: std::fmt::Debug,
    F: Fn() -> C,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.built.get() {
            Some(built) => f.debug_tuple("Lazy").field(built).finish(),
            None => f.write_str("Lazy(<unbuilt>)"),
        }
    }
}

/// Creates a LAZY combinator.
pub const fn lazy<C, F>(factory: F) -> Lazy<C, F>
where
    F: Fn() -> C,
{
    Lazy::new(factory)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{Constraints, Elements};
    use crate::foundation::{ConstraintExt, Details, Inspect, Shape, constraint_fn};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    fn always() -> impl Constraint + Send + Sync + 'static {
        constraint_fn("Always", |ctx| Ok(vec![ctx.violation("always", Details::new())]))
    }

    // A tree of sequences, as deep as the value says.
    #[derive(Default)]
    struct Tree(Vec<Tree>);

    impl Inspect for Tree {
        fn shape(&self) -> Shape<'_> {
            Shape::Sequence(&self.0)
        }
    }

    fn every_level() -> BoxedConstraint {
        Constraints::new()
            .with(always())
            .with(Elements::new(Lazy::recursive(every_level)))
            .boxed()
    }

    #[test]
    fn test_recursion_follows_the_value() {
        let tree = Tree(vec![Tree(vec![Tree::default()]), Tree::default()]);
        let found = crate::validate(&tree, &every_level()).unwrap();

        let paths: Vec<&str> = found.iter().map(|v| v.path()).collect();
        assert_eq!(paths, vec!["", ".[0]", ".[0].[0]", ".[1]"]);
    }

    #[test]
    fn test_unreached_levels_are_never_built() {
        let nested = Elements::new(lazy(|| {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            always()
        }));

        let found = crate::validate(&Vec::<u8>::new(), &nested).unwrap();
        assert!(found.is_empty());
        assert_eq!(BUILDS.load(Ordering::SeqCst), 0);

        let found = crate::validate(&vec![1_u8, 2, 3], &nested).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_name_tracks_the_build() {
        let deferred = lazy(Constraints::new);
        assert_eq!(deferred.name(), "Lazy");
        assert!(!deferred.is_built());

        crate::validate(&1_u8, &deferred).unwrap();
        assert!(deferred.is_built());
        assert_eq!(deferred.name(), "Constraints");
    }
}
