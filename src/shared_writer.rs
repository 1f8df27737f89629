use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A `Write` sink backed by a reference-counted buffer, so tests can hold
/// onto a handle and inspect captured output after the writer itself has
/// been moved into a `Diagnostics` or `Interpreter`.
#[derive(Clone, Default)]
pub struct SharedWriter(Rc<RefCell<Vec<u8>>>);

impl SharedWriter {
    pub fn new() -> Self {
        SharedWriter(Rc::new(RefCell::new(Vec::new())))
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}
