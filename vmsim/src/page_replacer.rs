use std::collections::VecDeque;

/// Eventos que o motor de tradução reporta à política de substituição.
/// Os valores são índices de frame físico.
pub enum FrameEvent {
    /// Frame tocado por um acesso a uma página já residente.
    Touched(usize),
    /// Frame preenchido por uma página recém carregada.
    Loaded(usize),
}

pub trait PageReplacer {
    fn frame_event(&mut self, _event: FrameEvent) {}

    /// Escolhe o frame a despejar e o retira do controle da política.
    /// `None` quando não há residente algum.
    fn pick_victim_frame(&mut self) -> Option<usize>;

    /// Frames sob controle da política, do residente mais antigo ao mais
    /// novo.
    fn resident_frames(&self) -> Vec<usize>;
}

/// FIFO: despeja sempre o residente mais antigo. Acessos (`Touched`) não
/// mexem na fila, só cargas.
pub struct FifoReplacer {
    fifo: VecDeque<usize>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        FifoReplacer {
            fifo: VecDeque::new(),
        }
    }
}

impl PageReplacer for FifoReplacer {
    fn frame_event(&mut self, event: FrameEvent) {
        if let FrameEvent::Loaded(frame_index) = event {
            self.fifo.push_back(frame_index)
        }
    }

    fn pick_victim_frame(&mut self) -> Option<usize> {
        self.fifo.pop_front()
    }

    fn resident_frames(&self) -> Vec<usize> {
        self.fifo.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_evicts_in_load_order() {
        let mut replacer = FifoReplacer::new();

        replacer.frame_event(FrameEvent::Loaded(2));
        replacer.frame_event(FrameEvent::Loaded(0));
        replacer.frame_event(FrameEvent::Loaded(1));

        assert_eq!(replacer.pick_victim_frame(), Some(2));
        assert_eq!(replacer.pick_victim_frame(), Some(0));
        assert_eq!(replacer.pick_victim_frame(), Some(1));
        assert_eq!(replacer.pick_victim_frame(), None);
    }

    #[test]
    fn test_touched_does_not_disturb_fifo_order() {
        let mut replacer = FifoReplacer::new();

        replacer.frame_event(FrameEvent::Loaded(0));
        replacer.frame_event(FrameEvent::Loaded(1));

        replacer.frame_event(FrameEvent::Touched(0));
        replacer.frame_event(FrameEvent::Touched(1));
        replacer.frame_event(FrameEvent::Touched(0));

        assert_eq!(replacer.pick_victim_frame(), Some(0));
        assert_eq!(replacer.pick_victim_frame(), Some(1));
    }

    #[test]
    fn test_resident_frames_snapshots_oldest_first() {
        let mut replacer = FifoReplacer::new();

        replacer.frame_event(FrameEvent::Loaded(3));
        replacer.frame_event(FrameEvent::Loaded(1));
        replacer.frame_event(FrameEvent::Loaded(2));

        assert_eq!(replacer.resident_frames(), vec![3, 1, 2]);

        replacer.pick_victim_frame();

        assert_eq!(replacer.resident_frames(), vec![1, 2]);
    }
}
