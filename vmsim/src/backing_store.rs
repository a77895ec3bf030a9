use crate::error::{VmError, VmResult};
use crate::page_loader::PageLoader;

/// "Disco" simulado: um slot de uma página por página virtual, tudo em
/// memória. É a cópia de autoridade de qualquer página não residente.
pub struct BackingStore<const PAGE_SIZE: usize, const VIRTUAL_PAGES: usize> {
    slots: [[u8; PAGE_SIZE]; VIRTUAL_PAGES],
}

impl<const PAGE_SIZE: usize, const VIRTUAL_PAGES: usize> BackingStore<PAGE_SIZE, VIRTUAL_PAGES> {
    pub fn new() -> Self {
        BackingStore {
            slots: [[0; PAGE_SIZE]; VIRTUAL_PAGES],
        }
    }

    /// Pré-carrega o começo do slot com `bytes`. O resto continua zerado.
    pub fn seed_page(&mut self, page_no: usize, bytes: &[u8]) -> VmResult<()> {
        self.check_slot(page_no)?;

        if bytes.len() > PAGE_SIZE {
            return Err(VmError::OutOfRange {
                what: "offset",
                index: bytes.len(),
                limit: PAGE_SIZE,
            });
        }

        self.slots[page_no][..bytes.len()].copy_from_slice(bytes);

        Ok(())
    }

    pub fn slot(&self, page_no: usize) -> VmResult<&[u8]> {
        self.check_slot(page_no)?;

        Ok(&self.slots[page_no])
    }

    fn check_slot(&self, page_no: usize) -> VmResult<()> {
        if page_no >= VIRTUAL_PAGES {
            return Err(VmError::OutOfRange {
                what: "slot",
                index: page_no,
                limit: VIRTUAL_PAGES,
            });
        }

        Ok(())
    }

    fn check_page_len(&self, len: usize) -> VmResult<()> {
        if len != PAGE_SIZE {
            return Err(VmError::OutOfRange {
                what: "offset",
                index: len,
                limit: PAGE_SIZE,
            });
        }

        Ok(())
    }
}

impl<const PAGE_SIZE: usize, const VIRTUAL_PAGES: usize> PageLoader for BackingStore<PAGE_SIZE, VIRTUAL_PAGES> {
    fn load_page_into(&mut self, page_no: usize, target: &mut [u8]) -> VmResult<()> {
        self.check_slot(page_no)?;
        self.check_page_len(target.len())?;

        target.copy_from_slice(&self.slots[page_no]);

        Ok(())
    }

    fn flush_page(&mut self, page_no: usize, buffer: &[u8]) -> VmResult<()> {
        self.check_slot(page_no)?;
        self.check_page_len(buffer.len())?;

        self.slots[page_no].copy_from_slice(buffer);

        Ok(())
    }
}
