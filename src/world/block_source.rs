//! World-query collaborator
//!
//! The probe never owns world state. It asks a `BlockSource` for the content
//! of one cell at a time, synchronously, once per visited cell.

use super::core::GridCell;
use std::convert::Infallible;

/// Host-provided block lookup by integer coordinate
pub trait BlockSource {
    /// Whatever the host returns for a cell (block metadata, ids, ...)
    type Content;
    /// Failure raised by the host lookup; propagated unchanged by traversals
    type Error;

    /// Content of `cell`, or `None` when the host reports nothing there
    fn block_at(&self, cell: GridCell) -> Result<Option<Self::Content>, Self::Error>;
}

impl<S: BlockSource + ?Sized> BlockSource for &S {
    type Content = S::Content;
    type Error = S::Error;

    fn block_at(&self, cell: GridCell) -> Result<Option<Self::Content>, Self::Error> {
        (**self).block_at(cell)
    }
}

/// Adapter turning a closure into a `BlockSource`
pub struct FnBlockSource<F> {
    lookup: F,
}

/// Wrap a fallible lookup closure
pub fn block_source_fn<F, C, E>(lookup: F) -> FnBlockSource<F>
where
    F: Fn(GridCell) -> Result<Option<C>, E>,
{
    FnBlockSource { lookup }
}

impl<F, C, E> BlockSource for FnBlockSource<F>
where
    F: Fn(GridCell) -> Result<Option<C>, E>,
{
    type Content = C;
    type Error = E;

    fn block_at(&self, cell: GridCell) -> Result<Option<C>, E> {
        (self.lookup)(cell)
    }
}

/// Adapter for lookups that cannot fail
pub struct InfallibleSource<F> {
    lookup: F,
}

/// Wrap an infallible lookup closure
pub fn infallible_source<F, C>(lookup: F) -> InfallibleSource<F>
where
    F: Fn(GridCell) -> Option<C>,
{
    InfallibleSource { lookup }
}

impl<F, C> BlockSource for InfallibleSource<F>
where
    F: Fn(GridCell) -> Option<C>,
{
    type Content = C;
    type Error = Infallible;

    fn block_at(&self, cell: GridCell) -> Result<Option<C>, Infallible> {
        Ok((self.lookup)(cell))
    }
}
