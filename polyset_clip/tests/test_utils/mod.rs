#![allow(dead_code)]
use polyset_clip::{
    native::{
        gpc_polygon, gpc_tristrip, BufferAllocator, NativePolygon, NativeTristrip, PolygonReader,
    },
    ClipEngine, ClipOperation, EngineFault, PolygonSet, Tristrip,
};
use std::alloc::Layout;
use std::collections::HashMap;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Allocator that counts blocks, checks every release against a live block with the same layout,
/// records the order blocks are released in, and can be told to fail a specific allocation.
#[derive(Debug, Default)]
pub struct CountingAllocator {
    allocations: AtomicUsize,
    releases: AtomicUsize,
    /// Zero based index of the allocation to fail.
    fail_at: Option<usize>,
    /// Address to (layout, allocation index) of every block not yet released.
    live: Mutex<HashMap<usize, (Layout, usize)>>,
    release_order: Mutex<Vec<usize>>,
}

impl CountingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        CountingAllocator {
            fail_at: Some(index),
            ..Default::default()
        }
    }

    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    pub fn live_blocks(&self) -> usize {
        self.live.lock().unwrap().len()
    }

    /// Allocation indexes of released blocks, in release order.
    pub fn release_order(&self) -> Vec<usize> {
        self.release_order.lock().unwrap().clone()
    }

    pub fn assert_balanced(&self) {
        assert_eq!(self.allocations(), self.releases(), "allocation/release mismatch");
        assert_eq!(self.live_blocks(), 0, "leaked blocks");
    }
}

unsafe impl BufferAllocator for CountingAllocator {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        assert_ne!(layout.size(), 0, "zero sized allocation requested");
        let index = self.allocations.load(Ordering::SeqCst);
        if self.fail_at == Some(index) {
            return None;
        }

        let block = NonNull::new(unsafe { std::alloc::alloc(layout) })?;
        let index = self.allocations.fetch_add(1, Ordering::SeqCst);
        self.live
            .lock()
            .unwrap()
            .insert(block.as_ptr() as usize, (layout, index));
        Some(block)
    }

    unsafe fn release(&self, block: NonNull<u8>, layout: Layout) {
        let recorded = self.live.lock().unwrap().remove(&(block.as_ptr() as usize));
        let (recorded_layout, index) = recorded.expect("release of unknown block or double free");
        assert_eq!(recorded_layout, layout, "release with a different layout");
        self.release_order.lock().unwrap().push(index);
        self.releases.fetch_add(1, Ordering::SeqCst);
        std::alloc::dealloc(block.as_ptr(), layout);
    }
}

/// Operands observed by [FakeEngine] for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCall {
    pub kind: &'static str,
    pub op: Option<ClipOperation>,
    pub subject: PolygonSet,
    pub clip: Option<PolygonSet>,
}

/// How [FakeEngine] answers a call.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Return the scripted polygon/strip results.
    Scripted,
    /// Report a failure without producing a buffer.
    Fail(String),
    /// Produce a header with a negative count and no arrays.
    Malformed,
}

/// Engine that records the operands it receives and answers with scripted results, allocated in
/// native buffers from its own [CountingAllocator].
#[derive(Debug)]
pub struct FakeEngine {
    pub polygon_result: PolygonSet,
    pub tristrip_result: Tristrip,
    pub response: Response,
    pub results_alloc: CountingAllocator,
    calls: Mutex<Vec<EngineCall>>,
    polygon_frees: AtomicUsize,
    tristrip_frees: AtomicUsize,
}

impl Default for FakeEngine {
    fn default() -> Self {
        FakeEngine {
            polygon_result: PolygonSet::empty(),
            tristrip_result: Tristrip::new(),
            response: Response::Scripted,
            results_alloc: CountingAllocator::new(),
            calls: Mutex::new(Vec::new()),
            polygon_frees: AtomicUsize::new(0),
            tristrip_frees: AtomicUsize::new(0),
        }
    }
}

impl FakeEngine {
    pub fn returning_polygon(polygon_result: PolygonSet) -> Self {
        FakeEngine {
            polygon_result,
            ..Default::default()
        }
    }

    pub fn returning_tristrip(tristrip_result: Tristrip) -> Self {
        FakeEngine {
            tristrip_result,
            ..Default::default()
        }
    }

    pub fn responding(response: Response) -> Self {
        FakeEngine {
            response,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn polygon_frees(&self) -> usize {
        self.polygon_frees.load(Ordering::SeqCst)
    }

    pub fn tristrip_frees(&self) -> usize {
        self.tristrip_frees.load(Ordering::SeqCst)
    }

    unsafe fn record(
        &self,
        kind: &'static str,
        op: Option<ClipOperation>,
        subject: &gpc_polygon,
        clip: Option<&gpc_polygon>,
    ) {
        let subject = read_operand(subject);
        let clip = clip.map(|c| read_operand(c));
        let call = EngineCall {
            kind,
            op,
            subject,
            clip,
        };
        self.calls.lock().unwrap().push(call);
    }

    fn polygon_response(&self) -> Result<gpc_polygon, EngineFault> {
        match &self.response {
            Response::Scripted => Ok(NativePolygon::marshal(&self.polygon_result, &self.results_alloc)
                .expect("scripted polygon marshal")
                .into_raw()),
            Response::Fail(msg) => Err(EngineFault::Reported(msg.clone())),
            Response::Malformed => {
                let mut raw = gpc_polygon::empty();
                raw.num_contours = -3;
                Ok(raw)
            }
        }
    }

    fn tristrip_response(&self) -> Result<gpc_tristrip, EngineFault> {
        match &self.response {
            Response::Scripted => {
                Ok(NativeTristrip::marshal(&self.tristrip_result, &self.results_alloc)
                    .expect("scripted tristrip marshal")
                    .into_raw())
            }
            Response::Fail(msg) => Err(EngineFault::Reported(msg.clone())),
            Response::Malformed => {
                let mut raw = gpc_tristrip::empty();
                raw.num_strips = -1;
                Ok(raw)
            }
        }
    }
}

unsafe fn read_operand(raw: &gpc_polygon) -> PolygonSet {
    PolygonReader::new(raw)
        .expect("engine received a malformed buffer")
        .to_polygon_set()
}

unsafe impl ClipEngine for FakeEngine {
    unsafe fn polygon_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_polygon, EngineFault> {
        self.record("polygon_clip", Some(op), subject, Some(clip));
        self.polygon_response()
    }

    unsafe fn tristrip_clip(
        &self,
        op: ClipOperation,
        subject: &gpc_polygon,
        clip: &gpc_polygon,
    ) -> Result<gpc_tristrip, EngineFault> {
        self.record("tristrip_clip", Some(op), subject, Some(clip));
        self.tristrip_response()
    }

    unsafe fn polygon_to_tristrip(
        &self,
        polygon: &gpc_polygon,
    ) -> Result<gpc_tristrip, EngineFault> {
        self.record("polygon_to_tristrip", None, polygon, None);
        self.tristrip_response()
    }

    unsafe fn free_polygon(&self, polygon: &mut gpc_polygon) {
        self.polygon_frees.fetch_add(1, Ordering::SeqCst);
        if polygon.num_contours >= 0 {
            drop(NativePolygon::from_raw(*polygon, &self.results_alloc));
        }
        *polygon = gpc_polygon::empty();
    }

    unsafe fn free_tristrip(&self, tristrip: &mut gpc_tristrip) {
        self.tristrip_frees.fetch_add(1, Ordering::SeqCst);
        if tristrip.num_strips >= 0 {
            drop(NativeTristrip::from_raw(*tristrip, &self.results_alloc));
        }
        *tristrip = gpc_tristrip::empty();
    }
}
