use crate::adapters::loggers::StdLogger;
use crate::core::deferred::{close_or_log, close_or_log_std};
use crate::core::guard::{close_on_drop_std, CloseOnDrop};
use crate::domain::ports::{Close, ErrorLogger};

/// Method-call forms of the close helpers, available on every [`Close`].
pub trait CloseExt: Close + Sized {
    fn close_or_log<L: ErrorLogger + ?Sized>(&mut self, log: &L) {
        close_or_log(self, log)
    }

    fn close_or_log_std(&mut self) {
        close_or_log_std(self)
    }

    fn defer_close<L: ErrorLogger>(self, log: L) -> CloseOnDrop<Self, L> {
        CloseOnDrop::new(self, log)
    }

    fn defer_close_std(self) -> CloseOnDrop<Self, &'static StdLogger> {
        close_on_drop_std(self)
    }
}

impl<C: Close> CloseExt for C {}
