use crate::adapters::loggers::{std_logger, StdLogger};
use crate::core::deferred::close_or_log;
use crate::domain::ports::{Close, ErrorLogger};
use std::ops::{Deref, DerefMut};

/// Closes the wrapped resource through [`close_or_log`] when dropped.
///
/// ```
/// use deferred_close::{CloseOnDrop, TracingLogger};
/// use std::io::Write;
///
/// let mut out = CloseOnDrop::new(std::io::BufWriter::new(Vec::new()), TracingLogger);
/// out.write_all(b"hello").unwrap();
/// // flushed here
/// ```
#[must_use = "`CloseOnDrop` closes immediately unless it is bound to a variable"]
pub struct CloseOnDrop<C: Close, L: ErrorLogger> {
    // `None` only once `into_inner` has taken the resource.
    resource: Option<C>,
    logger: L,
}

impl<C: Close, L: ErrorLogger> CloseOnDrop<C, L> {
    pub fn new(resource: C, logger: L) -> Self {
        Self {
            resource: Some(resource),
            logger,
        }
    }

    /// Disarms the guard and hands the resource back unclosed.
    pub fn into_inner(mut self) -> C {
        match self.resource.take() {
            Some(resource) => resource,
            None => unreachable!("resource is present until into_inner"),
        }
    }
}

pub fn close_on_drop_std<C: Close>(resource: C) -> CloseOnDrop<C, &'static StdLogger> {
    CloseOnDrop::new(resource, std_logger())
}

impl<C: Close, L: ErrorLogger> Deref for CloseOnDrop<C, L> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.resource {
            Some(resource) => resource,
            None => unreachable!("resource is present until into_inner"),
        }
    }
}

impl<C: Close, L: ErrorLogger> DerefMut for CloseOnDrop<C, L> {
    fn deref_mut(&mut self) -> &mut C {
        match &mut self.resource {
            Some(resource) => resource,
            None => unreachable!("resource is present until into_inner"),
        }
    }
}

impl<C: Close, L: ErrorLogger> Drop for CloseOnDrop<C, L> {
    fn drop(&mut self) {
        if let Some(resource) = self.resource.as_mut() {
            close_or_log(resource, &self.logger);
        }
    }
}
