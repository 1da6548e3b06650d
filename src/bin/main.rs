fn main() {
  ckb_inscription::main();
}
