// libnur-rs/libnur/src/device/execute.rs

//! One inventory round followed by the caller's operations on every tag.

use log::{debug, error, info, trace};

use crate::constants::TID_SNAPSHOT_WORDS;
use crate::device::handle::{Initialized, Reader};
use crate::operation::{reads_tid_bank, OperationSource, TagOperation};
use crate::protocol::{Filter, FilterProgram};
use crate::radio::InventoryParams;
use crate::tag::epc_bank::read_epc_bank_data;
use crate::tag::{InventoriedTag, Singulation, SingulationStrategy, TagContext, TagData, TagProcessor};
use crate::taxonomy::RfcError;
use crate::types::{AntennaId, Session};
use crate::utils::Hex;
use crate::Result;

impl Reader<Initialized> {
    /// Inventory the tags seen by `antennas` that pass `filters` and run
    /// `operations` on each of them.
    ///
    /// Radio faults never surface here: they end up in the per-tag results,
    /// or in an empty list when the inventory itself fails. A malformed
    /// filter is returned as `Error::Parameter` once a region is set.
    pub fn execute(
        &mut self,
        antennas: &[AntennaId],
        filters: &[Filter],
        operations: &[TagOperation],
        mut consumer: Option<&mut (dyn OperationSource + '_)>,
    ) -> Result<Vec<TagData>> {
        let region = self.setup.current_region();
        if !region.is_specified() {
            debug!("region not set, not transmitting");
            return Ok(Vec::new());
        }

        let program = FilterProgram::compile(filters)?;

        let antennas = self.effective_antennas(antennas);
        trace!("execute on {:?} with {} operations", antennas, operations.len());
        if antennas.is_empty() {
            return Ok(Vec::new());
        }

        match self.selection.apply(&mut *self.setup, &antennas) {
            Ok(0) => {
                debug!("no requested antenna is enabled");
                return Ok(Vec::new());
            }
            Ok(_) => {}
            Err(e) => {
                error!("failed to select antennas {:?}: {}", antennas, e);
                return Ok(Vec::new());
            }
        }

        let sing = Singulation::optimal(filters);
        let params = self.inventory_params(&sing, operations);
        for f in &program.filters {
            trace!("select {}", f);
        }

        let tags = match self.radio.run_inventory(&params, &program) {
            Ok(tags) => tags,
            Err(e) if e.is_recoverable() => {
                debug!("inventory interrupted, treating as no tags: {}", e);
                Vec::new()
            }
            Err(e) => {
                error!("inventory failed: {}", e);
                return Ok(Vec::new());
            }
        };

        let mut em4325 = false;
        let mut results = Vec::with_capacity(tags.len());
        for (index, tag) in tags.into_iter().enumerate() {
            if !em4325 && tag.is_em4325() {
                info!("EM4325 sensor tag seen, resetting S0 around its operations");
                em4325 = true;
            }
            let data = self.process_tag(index, tag, &sing, operations, consumer.as_deref_mut(), em4325);
            results.push(data);
        }

        trace!("execute done, {} tags", results.len());
        Ok(results)
    }

    /// Antennas this call may use.
    fn effective_antennas(&self, requested: &[AntennaId]) -> Vec<AntennaId> {
        let requested = self
            .config
            .antenna_override
            .as_deref()
            .unwrap_or(requested);

        let connected = self.setup.connected_antennas();
        match requested.first() {
            Some(first) if first.is_all() => connected.antennas(),
            _ => requested
                .iter()
                .copied()
                .filter(|a| connected.contains(*a))
                .collect(),
        }
    }

    fn inventory_params(&self, sing: &Singulation, operations: &[TagOperation]) -> InventoryParams {
        let control = self.config.singulation;
        let capture_tid = sing.strategy() == SingulationStrategy::Tid
            || (self.config.optimized_tid_reading && reads_tid_bank(operations));

        InventoryParams {
            session: control.session,
            q: control.q,
            rounds: control.rounds,
            transit_time: control.transit_time,
            tid_words: capture_tid.then_some(TID_SNAPSHOT_WORDS),
        }
    }

    fn process_tag(
        &mut self,
        index: usize,
        tag: InventoriedTag,
        sing: &Singulation,
        operations: &[TagOperation],
        consumer: Option<&mut (dyn OperationSource + '_)>,
        reset_session: bool,
    ) -> TagData {
        let mut data = TagData::new(index);
        data.antenna = Some(tag.antenna());
        data.channel = tag.channel();
        data.rssi = tag.rssi();

        let sing = match sing.strategy() {
            SingulationStrategy::Epc => Singulation::for_tag(SingulationStrategy::Epc, &tag),
            SingulationStrategy::Tid => sing.clone(),
        };

        let bank = read_epc_bank_data(&mut *self.radio, &sing, &tag, false);
        let error = if bank.is_success() {
            data.crc = bank.crc;
            data.pc = bank.pc;
            data.xpc = bank.xpc;
            data.epc = bank.epc;
            None
        } else {
            debug!("tag {} EPC bank unreadable: {}", index, bank.result);
            Some(RfcError::NonSpecificTagError)
        };
        trace!("tag {} on {}: EPC {}", index, data.antenna.unwrap_or(AntennaId::ALL), Hex(&data.epc));

        let mut ctx = TagContext::new(tag, data, sing);
        ctx.error = error;

        let reset = reset_session && !operations.is_empty();
        if reset {
            self.reset_s0();
        }
        TagProcessor::new(&mut *self.radio, &self.config).run(&mut ctx, operations, consumer);
        if reset {
            self.reset_s0();
        }

        ctx.data
    }

    fn reset_s0(&mut self) {
        if let Err(e) = self.radio.reset_to_target(Session::S0, true) {
            debug!("failed to reset S0 inventoried flag: {}", e);
        }
    }
}
