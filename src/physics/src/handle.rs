use fnv::FnvHashMap;
use slotmap::new_key_type;

new_key_type! {
	pub struct ParticleId;
	pub struct SpringId;
	pub struct BehaviorId;
}

/// Duplicate-free id set that keeps insertion order.
///
/// Iteration order decides floating point results, so it must be
/// deterministic; the fnv index keeps membership checks O(1).
#[derive(Clone, Default)]
pub struct OrderedSet<K: slotmap::Key> {
	order: Vec<K>,
	index: FnvHashMap<K, usize>,
}

impl<K: slotmap::Key> OrderedSet<K> {
	pub fn insert(&mut self, key: K) -> bool {
		if self.index.contains_key(&key) {
			return false;
		}
		self.index.insert(key, self.order.len());
		self.order.push(key);
		true
	}

	pub fn remove(&mut self, key: K) -> bool {
		let pos = match self.index.remove(&key) {
			Some(pos) => pos,
			None => return false,
		};
		self.order.remove(pos);
		for later in &self.order[pos..] {
			if let Some(slot) = self.index.get_mut(later) {
				*slot -= 1;
			}
		}
		true
	}

	pub fn contains(&self, key: K) -> bool {
		self.index.contains_key(&key)
	}

	pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
		self.order.iter().copied()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn clear(&mut self) {
		self.order.clear();
		self.index.clear();
	}
}
