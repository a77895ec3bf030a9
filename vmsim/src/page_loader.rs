use crate::error::VmResult;

/// Fonte persistida das páginas ("disco"). As duas operações copiam sempre
/// uma página inteira.
pub trait PageLoader {
    /// Copia o conteúdo persistido da página para `target`, que deve ter
    /// exatamente o tamanho de uma página.
    fn load_page_into(&mut self, page_no: usize, target: &mut [u8]) -> VmResult<()>;

    /// Persiste `buffer`, o conteúdo atual da página, de volta no slot dela.
    fn flush_page(&mut self, page_no: usize, buffer: &[u8]) -> VmResult<()>;
}
