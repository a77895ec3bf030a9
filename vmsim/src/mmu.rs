use log::{debug, trace};

use crate::error::{VmError, VmResult};
use crate::frame_store::FrameStore;
use crate::page_loader::PageLoader;
use crate::page_replacer::{FrameEvent, PageReplacer};
use crate::page_table::PageTable;

pub struct Mmu<
    const PAGE_SIZE: usize,
    const VIRTUAL_PAGES: usize,
    const PHYSICAL_FRAMES: usize,
    REPLACER: PageReplacer,
    LOADER: PageLoader
> {
    frames: FrameStore<PAGE_SIZE, PHYSICAL_FRAMES>,
    page_table: PageTable<VIRTUAL_PAGES>,
    replacer: REPLACER,
    loader: LOADER,
    fault_count: u64,
}

impl<const PAGE_SIZE: usize, const VIRTUAL_PAGES: usize, const PHYSICAL_FRAMES: usize, REPLACER, LOADER> Mmu<PAGE_SIZE, VIRTUAL_PAGES, PHYSICAL_FRAMES, REPLACER, LOADER> where
    REPLACER: PageReplacer,
    LOADER: PageLoader,
{
    pub fn new(replacer: REPLACER, loader: LOADER) -> Self {
        Mmu {
            frames: FrameStore::new(),
            page_table: PageTable::new(),
            replacer,
            loader,
            fault_count: 0,
        }
    }

    pub fn read(&mut self, address: usize) -> VmResult<u8> {
        let (_page_no, frame_index, offset) = self.translate_addr(address)?;

        self.frames.read_byte(frame_index, offset)
    }

    pub fn write(&mut self, address: usize, value: u8) -> VmResult<()> {
        let (page_no, frame_index, offset) = self.translate_addr(address)?;

        self.frames.write_byte(frame_index, offset, value)?;

        // o dirty só é marcado depois do byte gravado
        self.page_table.mark_dirty(page_no)
    }

    pub fn is_present(&self, page_no: usize) -> bool {
        matches!(self.page_table.get(page_no), Ok(Some(_)))
    }

    pub fn is_dirty(&self, page_no: usize) -> bool {
        matches!(self.page_table.get(page_no), Ok(Some(entry)) if entry.dirty)
    }

    /// Páginas residentes na ordem da fila FIFO, da mais antiga para a mais
    /// nova.
    pub fn resident_pages(&self) -> Vec<usize> {
        self.replacer
            .resident_frames()
            .into_iter()
            .filter_map(|frame_index| self.page_table.owner_of(frame_index).map(|(page_no, _)| page_no))
            .collect()
    }

    pub fn fault_count(&self) -> u64 {
        self.fault_count
    }

    pub fn loader(&self) -> &LOADER {
        &self.loader
    }

    fn translate_addr(&mut self, address: usize) -> VmResult<(usize, usize, usize)> {
        let limit = VIRTUAL_PAGES * PAGE_SIZE;

        if address >= limit {
            // "segfault" simulado: rejeitado antes de qualquer mutação
            return Err(VmError::InvalidAddress { addr: address, limit });
        }

        let page_no = address / PAGE_SIZE;
        let offset = address % PAGE_SIZE;

        trace!("mmu: acesso addr={:#06X} page_num={:#04X} offset={:#04X}", address, page_no, offset);

        let frame_index = self.ensure_in_ram(page_no)?;

        self.replacer.frame_event(FrameEvent::Touched(frame_index));

        Ok((page_no, frame_index, offset))
    }

    /// Garante a página em RAM. Idempotente para páginas presentes: o hit
    /// não mexe na ordem FIFO.
    fn ensure_in_ram(&mut self, page_no: usize) -> VmResult<usize> {
        match self.page_table.get(page_no)? {
            Some(entry) => {
                trace!("mmu: page hit na página {:#04X}", page_no);

                Ok(entry.frame_index)
            },
            None => self.handle_page_fault(page_no),
        }
    }

    fn handle_page_fault(&mut self, page_no: usize) -> VmResult<usize> {
        self.fault_count += 1;

        debug!("mmu: page fault na página {:#04X}! tratando...", page_no);

        let frame_index = match self.frames.alloc_frame() {
            Some(free_index) => free_index,
            None => {
                // sem frame livre: despeja o residente mais antigo
                let victim_frame = self.replacer.pick_victim_frame().ok_or(VmError::OutOfRange {
                    what: "frame",
                    index: 0,
                    limit: PHYSICAL_FRAMES,
                })?;

                let (victim_page, victim_entry) =
                    self.page_table.owner_of(victim_frame).ok_or(VmError::OutOfRange {
                        what: "frame",
                        index: victim_frame,
                        limit: PHYSICAL_FRAMES,
                    })?;

                if victim_entry.dirty {
                    debug!("mmu: página {:#04X} suja, salvando antes de sobrescrever", victim_page);

                    let frame = self.frames.frame(victim_frame)?;
                    self.loader.flush_page(victim_page, frame)?;
                } else {
                    debug!("mmu: página {:#04X} limpa, descartada sem write-back", victim_page);
                }

                self.page_table.mark_absent(victim_page)?;

                victim_frame
            },
        };

        // o conteúdo persistido sobrescreve o que houver no frame
        let frame = self.frames.frame_mut(frame_index)?;
        self.loader.load_page_into(page_no, frame)?;

        self.page_table.set(page_no, frame_index)?;
        self.replacer.frame_event(FrameEvent::Loaded(frame_index));

        debug!("mmu: página {:#04X} mapeada para o frame físico idx={:#04X}", page_no, frame_index);

        Ok(frame_index)
    }
}
