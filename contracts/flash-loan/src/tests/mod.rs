
mod initialize;
mod reentrancy;
mod upgrade;
