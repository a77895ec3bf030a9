//! Demonstração do simulador: passeia por mais páginas do que há frames
//! para forçar despejo e write-back.

use vmsim::{backing_store::BackingStore, mmu::Mmu, page_replacer::FifoReplacer};

const PAGE_SIZE: usize = 256;
const VIRTUAL_PAGES: usize = 16;
const PHYSICAL_FRAMES: usize = 8;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut store = BackingStore::<PAGE_SIZE, VIRTUAL_PAGES>::new();
    store.seed_page(0, b"paginas que nunca foram escritas vem do seed").unwrap();

    let mut mmu = Mmu::<PAGE_SIZE, VIRTUAL_PAGES, PHYSICAL_FRAMES, _, _>::new(FifoReplacer::new(), store);

    // 16 páginas sobre 8 frames: a segunda metade do passeio despeja a primeira
    for page_no in 0..VIRTUAL_PAGES {
        mmu.write(page_no * PAGE_SIZE, page_no as u8).unwrap();
    }

    dbg!(mmu.read(0).unwrap());
    dbg!(mmu.read(5 * PAGE_SIZE).unwrap());

    // endereço fora do espaço virtual: rejeitado sem mexer em nada
    let _ = dbg!(mmu.read(0xCAFE));

    println!("page faults: {}", mmu.fault_count());
    println!("residentes (FIFO): {:?}", mmu.resident_pages());
    println!("slot 0 persistido: {}", &hex::encode(mmu.loader().slot(0).unwrap())[..32]);
}
