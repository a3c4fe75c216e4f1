//! Child-list storage shared by the parent record types

use contacts_core::{PropertyId, RecordType, Result};

use crate::dispatch::unsupported;
use crate::list::RecordList;

/// Typed child lists addressed by the parent's record-valued property ids
///
/// `ids[i]` names `lists[i]`.
#[derive(Debug)]
pub(crate) struct ChildLists {
    owner: RecordType,
    ids: &'static [PropertyId],
    lists: Vec<RecordList>,
}

impl ChildLists {
    /// Empty lists; `types[i]` is the element type behind `ids[i]` and
    /// `singleton` names the list capped at one record
    pub(crate) fn new(
        owner: RecordType,
        ids: &'static [PropertyId],
        types: &[RecordType],
        singleton: Option<PropertyId>,
    ) -> Self {
        debug_assert_eq!(ids.len(), types.len());
        let lists = ids
            .iter()
            .zip(types)
            .map(|(&id, &rt)| {
                if Some(id) == singleton {
                    RecordList::singleton(rt)
                } else {
                    RecordList::of_type(rt)
                }
            })
            .collect();
        Self { owner, ids, lists }
    }

    pub(crate) fn ids(&self) -> &'static [PropertyId] {
        self.ids
    }

    fn position(&self, id: PropertyId) -> Result<usize> {
        self.ids
            .iter()
            .position(|&candidate| candidate == id)
            .ok_or_else(|| unsupported(self.owner, id))
    }

    pub(crate) fn get(&self, id: PropertyId) -> Result<&RecordList> {
        let idx = self.position(id)?;
        Ok(&self.lists[idx])
    }

    pub(crate) fn get_mut(&mut self, id: PropertyId) -> Result<&mut RecordList> {
        let idx = self.position(id)?;
        Ok(&mut self.lists[idx])
    }

    /// Deep copy of the live children of every list
    pub(crate) fn try_clone(&self) -> Result<Self> {
        let mut lists = Vec::new();
        lists.try_reserve_exact(self.lists.len())?;
        for list in &self.lists {
            lists.push(list.duplicate()?);
        }
        Ok(Self {
            owner: self.owner,
            ids: self.ids,
            lists,
        })
    }
}
