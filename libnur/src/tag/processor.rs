// libnur-rs/libnur/src/tag/processor.rs

//! Runs tag operations against one singulated tag.
//!
//! Operations run in order until one fails. From then on the tag is
//! considered gone for the rest of the list: later operations are answered
//! from the recorded error without contacting the radio.

use log::{debug, trace};

use crate::config::ExecuteConfig;
use crate::constants::{RESERVED_BANK_WORDS, TID_MIN_WORDS};
use crate::operation::{
    CustomOperation, CustomResult, KillOperation, KillResult, LockOperation, LockResult,
    OperationResult, OperationSource, ReadOperation, ReadResult, TagOperation, WriteOperation,
    WriteResult,
};
use crate::protocol::{custom, tid, CustomExchange};
use crate::radio::Radio;
use crate::tag::{InventoriedTag, Singulation, TagData};
use crate::taxonomy::{
    map_error, CustomResultKind, ErrorContext, KillResultKind, LockResultKind, ReadResultKind,
    RfcError,
};
use crate::types::MemoryBank;
use crate::utils::Hex;

/// Everything known about the tag whose operations are running.
#[derive(Debug, Clone)]
pub struct TagContext {
    pub tag: InventoriedTag,
    pub data: TagData,
    pub sing: Singulation,
    /// Set once an operation on this tag failed.
    pub error: Option<RfcError>,
}

impl TagContext {
    pub fn new(tag: InventoriedTag, data: TagData, sing: Singulation) -> Self {
        Self {
            tag,
            data,
            sing,
            error: None,
        }
    }
}

pub struct TagProcessor<'a> {
    radio: &'a mut dyn Radio,
    config: &'a ExecuteConfig,
}

impl<'a> TagProcessor<'a> {
    pub fn new(radio: &'a mut dyn Radio, config: &'a ExecuteConfig) -> Self {
        Self { radio, config }
    }

    /// Run `operations` in order, appending results to `ctx.data`.
    pub fn run(
        &mut self,
        ctx: &mut TagContext,
        operations: &[TagOperation],
        mut source: Option<&mut (dyn OperationSource + '_)>,
    ) {
        for op in operations {
            self.perform(ctx, op, source.as_deref_mut());
        }
    }

    /// Run a single operation.
    ///
    /// A request asks `source` for more operations and runs them without a
    /// source, so requests expand one level only.
    pub fn perform(
        &mut self,
        ctx: &mut TagContext,
        op: &TagOperation,
        source: Option<&mut (dyn OperationSource + '_)>,
    ) {
        if let Some(err) = ctx.error {
            if let Some(result) = op.failed(err) {
                ctx.data.results.push(result);
            }
            return;
        }

        let result = match op {
            TagOperation::Read(r) => OperationResult::Read(self.read(ctx, r)),
            TagOperation::Write(w) => OperationResult::Write(self.write(ctx, w)),
            TagOperation::Lock(l) => OperationResult::Lock(self.lock(&ctx.sing, l)),
            TagOperation::Kill(k) => OperationResult::Kill(self.kill(&ctx.sing, k)),
            TagOperation::Custom(c) => OperationResult::Custom(self.custom(ctx, c)),
            TagOperation::Request(req) => {
                if let Some(source) = source {
                    let additional = source.additional_operations(&ctx.data);
                    trace!("request {} expanded to {} operations", req.id, additional.len());
                    for op in &additional {
                        self.perform(ctx, op, None);
                    }
                }
                return;
            }
        };

        if !result.is_success() {
            debug!("operation {} failed, skipping the rest for this tag", result.id());
            ctx.error = Some(RfcError::NonSpecificTagError);
        }
        ctx.data.results.push(result);
    }

    /// Read words, or the complete bank when `op.length` is 0.
    pub fn read(&mut self, ctx: &TagContext, op: &ReadOperation) -> ReadResult {
        if op.length == 0 {
            return self.read_complete_bank(ctx, op);
        }

        let start = op.offset as usize * 2;
        let end = start + op.length as usize * 2;
        if op.bank == MemoryBank::Tid {
            if let Some(snapshot) = self.tid_snapshot(&ctx.tag).filter(|s| end <= s.len()) {
                return ReadResult::success(&op.id, snapshot[start..end].to_vec());
            }
        }

        match self.read_words(&ctx.sing, op, op.offset as u32, op.length as u32) {
            Ok(data) => ReadResult::success(&op.id, data),
            Err(kind) => ReadResult::failed(&op.id, kind),
        }
    }

    /// Read a bank without knowing its size.
    pub fn read_complete_bank(&mut self, ctx: &TagContext, op: &ReadOperation) -> ReadResult {
        let offset = op.offset as u32;
        let bank = match op.bank {
            MemoryBank::Epc => Ok(epc_bank_image(ctx)),
            MemoryBank::Tid => self.read_tid_bank(ctx, op),
            MemoryBank::User => {
                let words = self.config.user_bank_word_count as u32;
                match self.read_words(&ctx.sing, op, offset, words.saturating_sub(offset)) {
                    Err(ReadResultKind::MemoryOverrunError) => {
                        debug!("user bank smaller than {} words, retrying with half", words);
                        self.read_words(&ctx.sing, op, offset, (words / 2).saturating_sub(offset))
                    }
                    other => other,
                }
            }
            MemoryBank::Reserved => self.read_words(
                &ctx.sing,
                op,
                offset,
                RESERVED_BANK_WORDS.saturating_sub(offset),
            ),
        };

        let bank = match op.bank {
            // these reads already started at the offset
            MemoryBank::User | MemoryBank::Reserved => bank,
            MemoryBank::Epc | MemoryBank::Tid => bank.and_then(|data| {
                data.get(offset as usize * 2..)
                    .map(<[u8]>::to_vec)
                    .ok_or(ReadResultKind::MemoryOverrunError)
            }),
        };

        match bank {
            Ok(data) => ReadResult::success(&op.id, data),
            Err(kind) => ReadResult::failed(&op.id, kind),
        }
    }

    fn read_tid_bank(
        &mut self,
        ctx: &TagContext,
        op: &ReadOperation,
    ) -> Result<Vec<u8>, ReadResultKind> {
        // TID is readable without access; the sizing reads never send a password
        let op = &ReadOperation {
            password: 0,
            ..op.clone()
        };
        let min_bytes = TID_MIN_WORDS as usize * 2;
        let mut tid = match self.tid_snapshot(&ctx.tag).filter(|s| s.len() >= min_bytes) {
            Some(snapshot) => snapshot.to_vec(),
            None => self.read_words(&ctx.sing, op, 0, TID_MIN_WORDS)?,
        };

        let bits = tid::bank_bits(&tid) as usize;
        if !tid::has_xtid_header(&tid) {
            tid.truncate(bits / 8);
        }
        if bits / 8 > tid.len() {
            trace!("TID bank is {} bits, reading the rest", bits);
            tid = self.read_words(&ctx.sing, op, 0, (bits / 16) as u32)?;
        }
        Ok(tid)
    }

    fn read_words(
        &mut self,
        sing: &Singulation,
        op: &ReadOperation,
        offset: u32,
        words: u32,
    ) -> Result<Vec<u8>, ReadResultKind> {
        if words == 0 {
            return Err(ReadResultKind::MemoryOverrunError);
        }
        self.radio
            .read(sing, op.bank, offset, words as usize * 2, op.password)
            .map_err(|e| {
                debug!("read {} failed: {}", op.id, e);
                map_error(&e, ErrorContext::read(op.password)).into()
            })
    }

    fn tid_snapshot<'t>(&self, tag: &'t InventoriedTag) -> Option<&'t [u8]> {
        if self.config.optimized_tid_reading {
            tag.tid()
        } else {
            None
        }
    }

    /// Write words; EPC-bank writes are tracked in the singulation.
    pub fn write(&mut self, ctx: &mut TagContext, op: &WriteOperation) -> WriteResult {
        let written = self
            .radio
            .write(&ctx.sing, op.bank, op.offset as u32, &op.data, op.password);

        match written {
            Ok(words) => {
                if op.bank == MemoryBank::Epc && self.config.handle_epc_change {
                    ctx.sing.apply_write(&mut ctx.tag, op);
                }
                WriteResult::success(&op.id, words)
            }
            Err(e) => {
                debug!("write {} failed: {}", op.id, e);
                WriteResult::failed(&op.id, map_error(&e, ErrorContext::write(op.password)).into())
            }
        }
    }

    pub fn lock(&mut self, sing: &Singulation, op: &LockOperation) -> LockResult {
        let locked = self.radio.lock(
            sing,
            op.field.memory_code(),
            op.privilege.action_code(),
            op.password,
        );
        match locked {
            Ok(()) => LockResult::new(&op.id, LockResultKind::Success),
            Err(e) => {
                debug!("lock {} failed: {}", op.id, e);
                LockResult::new(&op.id, map_error(&e, ErrorContext::lock()).into())
            }
        }
    }

    /// Kill the tag. Password 0 is refused without contacting the tag.
    pub fn kill(&mut self, sing: &Singulation, op: &KillOperation) -> KillResult {
        if op.kill_password == 0 {
            return KillResult::new(&op.id, KillResultKind::ZeroKillPasswordError);
        }
        match self.radio.kill(sing, op.kill_password) {
            Ok(()) => KillResult::new(&op.id, KillResultKind::Success),
            Err(e) => {
                debug!("kill {} failed: {}", op.id, e);
                KillResult::new(&op.id, map_error(&e, ErrorContext::kill()).into())
            }
        }
    }

    pub fn custom(&mut self, ctx: &TagContext, op: &CustomOperation) -> CustomResult {
        let Some(command) = custom::sensor_command(&op.data, op.bit_length as usize, ctx.tag.tid())
        else {
            return CustomResult::failed(&op.id, CustomResultKind::OpNotPossibleError);
        };
        let Some(exchange) = CustomExchange::new(&command, op.password) else {
            debug!("custom {} payload shorter than {} bits", op.id, command.bit_len);
            return CustomResult::failed(&op.id, CustomResultKind::NonSpecificTagError);
        };

        trace!(
            "sending custom command {} ({} bits)",
            Hex(&exchange.bit_buffer),
            exchange.bit_len
        );
        match self.radio.custom_exchange(&ctx.sing, &exchange) {
            Ok(reply) => CustomResult::success(&op.id, reply),
            Err(e) => {
                debug!("custom {} failed: {}", op.id, e);
                CustomResult::failed(&op.id, map_error(&e, ErrorContext::custom(op.password)).into())
            }
        }
    }
}

/// CRC, PC and current EPC as one bank image.
fn epc_bank_image(ctx: &TagContext) -> Vec<u8> {
    let epc = ctx.tag.epc();
    let mut image = Vec::with_capacity(4 + epc.len());
    image.extend_from_slice(&ctx.data.crc.to_be_bytes());
    image.extend_from_slice(&ctx.data.pc.to_be_bytes());
    image.extend_from_slice(epc);
    image
}
