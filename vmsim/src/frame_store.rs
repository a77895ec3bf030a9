use std::collections::VecDeque;

use crate::error::{VmError, VmResult};

/// Memória física: os frames em si e a lista de frames ainda livres.
pub struct FrameStore<const PAGE_SIZE: usize, const FRAME_COUNT: usize> {
    frames: [[u8; PAGE_SIZE]; FRAME_COUNT],
    free: VecDeque<usize>,
}

impl<const PAGE_SIZE: usize, const FRAME_COUNT: usize> FrameStore<PAGE_SIZE, FRAME_COUNT> {
    pub fn new() -> Self {
        let free = (0..FRAME_COUNT).into_iter().collect();

        FrameStore {
            frames: [[0; PAGE_SIZE]; FRAME_COUNT],
            free,
        }
    }

    pub fn has_free_frame(&self) -> bool {
        !self.free.is_empty()
    }

    // frames despejados não voltam para a lista: o despejo reutiliza o
    // frame da vítima direto
    pub fn alloc_frame(&mut self) -> Option<usize> {
        self.free.pop_front()
    }

    pub fn read_byte(&self, frame_no: usize, offset: usize) -> VmResult<u8> {
        self.check(frame_no, offset)?;

        Ok(self.frames[frame_no][offset])
    }

    pub fn write_byte(&mut self, frame_no: usize, offset: usize, value: u8) -> VmResult<()> {
        self.check(frame_no, offset)?;

        self.frames[frame_no][offset] = value;

        Ok(())
    }

    pub fn frame(&self, frame_no: usize) -> VmResult<&[u8]> {
        self.check_frame(frame_no)?;

        Ok(&self.frames[frame_no])
    }

    pub fn frame_mut(&mut self, frame_no: usize) -> VmResult<&mut [u8]> {
        self.check_frame(frame_no)?;

        Ok(&mut self.frames[frame_no])
    }

    fn check_frame(&self, frame_no: usize) -> VmResult<()> {
        if frame_no >= FRAME_COUNT {
            return Err(VmError::OutOfRange {
                what: "frame",
                index: frame_no,
                limit: FRAME_COUNT,
            });
        }

        Ok(())
    }

    fn check(&self, frame_no: usize, offset: usize) -> VmResult<()> {
        self.check_frame(frame_no)?;

        if offset >= PAGE_SIZE {
            return Err(VmError::OutOfRange {
                what: "offset",
                index: offset,
                limit: PAGE_SIZE,
            });
        }

        Ok(())
    }
}
