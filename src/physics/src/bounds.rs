use crate::V2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub xmin: f32,
	pub xmax: f32,
	pub ymin: f32,
	pub ymax: f32,
}

impl Bounds {
	pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
		Self {
			xmin,
			xmax,
			ymin,
			ymax,
		}
	}

	pub fn from_size(x: f32, y: f32, width: f32, height: f32) -> Self {
		Self::new(x, y, x + width, y + height)
	}

	pub fn shrink(&self, r: f32) -> Self {
		Self {
			xmin: self.xmin + r,
			xmax: self.xmax - r,
			ymin: self.ymin + r,
			ymax: self.ymax - r,
		}
	}

	// reports per axis whether a clamp occurred
	pub fn clamp(&self, pos: &mut V2) -> [bool; 2] {
		let mut hit = [false; 2];
		if pos[0] < self.xmin {
			pos[0] = self.xmin;
			hit[0] = true;
		} else if pos[0] > self.xmax {
			pos[0] = self.xmax;
			hit[0] = true;
		}
		if pos[1] < self.ymin {
			pos[1] = self.ymin;
			hit[1] = true;
		} else if pos[1] > self.ymax {
			pos[1] = self.ymax;
			hit[1] = true;
		}
		hit
	}

	pub fn contains(&self, pos: V2) -> bool {
		pos[0] >= self.xmin
			&& pos[0] <= self.xmax
			&& pos[1] >= self.ymin
			&& pos[1] <= self.ymax
	}
}
