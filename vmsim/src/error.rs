use thiserror::Error;

/// Erros que o simulador reporta ao chamador.
///
/// Page fault, evicção e write-back NÃO aparecem aqui: são o fluxo normal
/// do simulador, não falhas.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VmError {
    /// Endereço virtual fora do espaço de endereçamento simulado. Faz as
    /// vezes de uma falha de segmentação: o acesso é rejeitado antes de
    /// qualquer mutação de estado.
    #[error("endereço virtual {addr:#06X} fora do espaço de endereçamento (limite {limit:#06X})")]
    InvalidAddress { addr: usize, limit: usize },

    /// Índice interno (página, frame, slot ou offset) fora dos limites.
    /// Indica erro de lógica no chamador ou invariante corrompida, nunca
    /// acontece em operação correta.
    #[error("índice de {what} {index} fora do intervalo (limite {limit})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },
}

pub type VmResult<T> = Result<T, VmError>;
