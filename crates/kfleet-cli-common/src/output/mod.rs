mod table;
mod serde;

pub use output::Terminal;
pub use output::OutputType;

pub use table::TableOutputHandler;
use table::TableRenderer;

use self::serde::SerdeRenderer;
pub use self::serde::SerializeType;

pub use self::error::OutputError;

mod error {

    use serde_json::Error as SerdeJsonError;
    use serde_yaml::Error as SerdeYamlError;

    #[derive(thiserror::Error, Debug)]
    pub enum OutputError {
        #[error(transparent)]
        SerdeJson {
            #[from]
            source: SerdeJsonError,
        },
        #[error("unable to render yaml: {source}")]
        SerdeYamlError {
            #[from]
            source: SerdeYamlError,
        },
    }
}

#[allow(clippy::module_inception)]
mod output {

    use std::sync::Arc;

    use clap::ValueEnum;
    use serde::Serialize;

    use super::TableOutputHandler;
    use super::TableRenderer;
    use super::SerdeRenderer;
    use super::SerializeType;
    use super::OutputError;

    #[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq)]
    #[allow(non_camel_case_types)]
    pub enum OutputType {
        table,
        json,
        #[value(alias = "yml")]
        yaml,
    }

    /// OutputType defaults to table formatting
    impl ::std::default::Default for OutputType {
        fn default() -> Self {
            OutputType::table
        }
    }

    /// OutputType check if table
    impl OutputType {
        pub fn is_table(&self) -> bool {
            *self == OutputType::table
        }
    }

    pub trait Terminal: Sized {
        fn print(&self, msg: &str);
        fn println(&self, msg: &str);

        fn render_table<T: TableOutputHandler>(self: Arc<Self>, val: &T, indent: bool) {
            let render = TableRenderer::new(self);
            render.render(val, indent);
        }

        fn render_serde<T: Serialize>(
            self: Arc<Self>,
            val: &T,
            mode: SerializeType,
        ) -> Result<(), OutputError> {
            let render = SerdeRenderer::new(self);
            render.render(val, mode)
        }
    }
}

/// in-memory terminal for tests
#[cfg(any(test, feature = "fixture"))]
pub mod fixture {

    use std::sync::{Mutex, MutexGuard, PoisonError};

    use super::Terminal;

    /// captures everything written to it
    #[derive(Debug, Default)]
    pub struct BufferTerminal {
        buf: Mutex<String>,
    }

    impl BufferTerminal {
        pub fn contents(&self) -> String {
            self.lock().clone()
        }

        fn lock(&self) -> MutexGuard<'_, String> {
            self.buf.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl Terminal for BufferTerminal {
        fn print(&self, msg: &str) {
            self.lock().push_str(msg);
        }

        fn println(&self, msg: &str) {
            let mut buf = self.lock();
            buf.push_str(msg);
            buf.push('\n');
        }
    }
}
