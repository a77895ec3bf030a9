use crate::error::{VmError, VmResult};

#[derive(Copy, Clone, Default, Debug)]
pub struct PageTableEntry {
    pub frame_index: usize,
    pub dirty: bool,
}

pub struct PageTable<const VIRTUAL_PAGES: usize> {
    table: [Option<PageTableEntry>; VIRTUAL_PAGES],
}

impl<const VIRTUAL_PAGES: usize> PageTable<VIRTUAL_PAGES> {
    pub fn new() -> Self {
        PageTable {
            table: [None; VIRTUAL_PAGES],
        }
    }

    pub fn get(&self, page_no: usize) -> VmResult<Option<PageTableEntry>> {
        self.check(page_no)?;

        Ok(self.table[page_no])
    }

    /// Liga a página ao frame. A entrada nasce limpa, mesmo que a página
    /// já estivesse presente e suja em outro frame.
    pub fn set(&mut self, page_no: usize, frame_index: usize) -> VmResult<()> {
        self.check(page_no)?;

        self.table[page_no] = Some(PageTableEntry { frame_index, dirty: false });

        Ok(())
    }

    pub fn mark_dirty(&mut self, page_no: usize) -> VmResult<()> {
        self.check(page_no)?;

        let entry = self.table[page_no].as_mut().expect("página ausente não pode ser suja");
        entry.dirty = true;

        Ok(())
    }

    pub fn mark_absent(&mut self, page_no: usize) -> VmResult<()> {
        self.check(page_no)?;

        self.table[page_no] = None;

        Ok(())
    }

    /// Varre a tabela atrás da página presente que ocupa o frame. A tabela
    /// é a única fonte de verdade do vínculo entre página e frame.
    pub fn owner_of(&self, frame_index: usize) -> Option<(usize, PageTableEntry)> {
        self.table
            .iter()
            .enumerate()
            .find_map(|(page_no, entry)| match entry {
                Some(pte) if pte.frame_index == frame_index => Some((page_no, *pte)),
                _ => None,
            })
    }

    fn check(&self, page_no: usize) -> VmResult<()> {
        if page_no >= VIRTUAL_PAGES {
            return Err(VmError::OutOfRange {
                what: "página",
                index: page_no,
                limit: VIRTUAL_PAGES,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_all_pages_absent() {
        let table = PageTable::<4>::new();

        for page_no in 0..4 {
            assert!(table.get(page_no).unwrap().is_none());
        }
    }

    #[test]
    fn test_get_rejects_page_out_of_range() {
        let table = PageTable::<4>::new();

        assert!(matches!(table.get(4), Err(VmError::OutOfRange { .. })));
        assert!(matches!(table.get(usize::MAX), Err(VmError::OutOfRange { .. })));
    }

    #[test]
    fn test_set_binds_frame_and_resets_dirty() {
        let mut table = PageTable::<4>::new();

        table.set(1, 0).unwrap();

        let entry = table.get(1).unwrap().unwrap();
        assert_eq!(entry.frame_index, 0);
        assert!(!entry.dirty);

        table.mark_dirty(1).unwrap();
        assert!(table.get(1).unwrap().unwrap().dirty);

        table.set(1, 3).unwrap();

        let entry = table.get(1).unwrap().unwrap();
        assert_eq!(entry.frame_index, 3);
        assert!(!entry.dirty);
    }

    #[test]
    fn test_mark_absent_clears_entry() {
        let mut table = PageTable::<4>::new();

        table.set(2, 1).unwrap();
        table.mark_absent(2).unwrap();

        assert!(table.get(2).unwrap().is_none());
    }

    #[test]
    fn test_owner_of_finds_the_bound_page() {
        let mut table = PageTable::<4>::new();

        table.set(0, 1).unwrap();
        table.set(2, 0).unwrap();

        let (page_no, entry) = table.owner_of(0).unwrap();
        assert_eq!(page_no, 2);
        assert_eq!(entry.frame_index, 0);

        let (page_no, _) = table.owner_of(1).unwrap();
        assert_eq!(page_no, 0);

        assert!(table.owner_of(5).is_none());
    }
}
